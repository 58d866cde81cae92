use reqwest::{Response as ReqwestResponse, StatusCode};

use serde::de::DeserializeOwned;

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// A raw Particle Cloud response.
///
/// The response is handed back exactly as the server sent it: an error
/// status code is **not** turned into an [`Error`].
#[derive(Debug)]
pub struct Response(ReqwestResponse);

impl Response {
    /// Returns the response [`StatusCode`].
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }

    /// Returns whether the response status code is in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.0.status().is_success()
    }

    /// Parses the response body into `T`.
    ///
    /// # Errors
    ///
    /// If the response body does not contain a valid `T`, a parsing error
    /// will be raised. This may occur due to an incorrect format or because
    /// the body was truncated.
    pub async fn parse_body<T: DeserializeOwned>(self) -> Result<T> {
        self.0
            .json::<T>()
            .await
            .map_err(|e| Error::new(ErrorKind::JsonResponse, format!("Json error caused by {e}")))
    }

    /// Parses the response body into an untyped `JSON` value.
    ///
    /// # Errors
    ///
    /// Same as [`Self::parse_body`].
    pub async fn json(self) -> Result<Value> {
        self.parse_body::<Value>().await
    }

    /// Returns the response body as text.
    ///
    /// # Errors
    ///
    /// Reading the body may fail due to network errors.
    pub async fn text(self) -> Result<String> {
        Ok(self.0.text().await?)
    }

    /// Opens a bytes stream from the response.
    ///
    /// Event stream responses never end on their own, so the body must be
    /// consumed as a stream. Chunks are not split into event records.
    ///
    /// # Errors
    ///
    /// Byte stream reading may fail due to network errors or data corruption.
    #[cfg(feature = "stream")]
    pub fn open_stream(self) -> impl futures_util::Stream<Item = Result<bytes::Bytes>> {
        use futures_util::TryStreamExt;
        self.0.bytes_stream().map_err(|e| {
            Error::new(
                ErrorKind::StreamResponse,
                format!("Stream error caused by {e}"),
            )
        })
    }

    /// Returns the underlying [`reqwest::Response`].
    #[must_use]
    pub fn into_inner(self) -> ReqwestResponse {
        self.0
    }

    pub(crate) const fn new(response: ReqwestResponse) -> Self {
        Self(response)
    }
}

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method};

use serde_json::Value;

use tracing::debug;

use crate::error::Result;
use crate::response::Response;

/// A request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// No body.
    Empty,
    /// A `JSON` body.
    Json(Value),
    /// A `multipart/form-data` body, already encoded with the given boundary.
    Multipart {
        /// Boundary separating the parts.
        boundary: &'static str,
        /// Encoded body.
        content: String,
    },
}

/// A request ready to be sent to the Particle Cloud.
///
/// Requests are built by the functions of each capability module and
/// discarded once sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Complete request url, access token included.
    pub url: String,
    /// Request body.
    pub body: Body,
}

impl Request {
    /// Creates a [`Request`].
    #[must_use]
    pub const fn new(method: Method, url: String, body: Body) -> Self {
        Self { method, url, body }
    }

    pub(crate) const fn get(url: String) -> Self {
        Self::new(Method::GET, url, Body::Empty)
    }

    pub(crate) const fn delete(url: String) -> Self {
        Self::new(Method::DELETE, url, Body::Empty)
    }

    pub(crate) const fn post(url: String, body: Body) -> Self {
        Self::new(Method::POST, url, body)
    }

    pub(crate) const fn put(url: String, body: Body) -> Self {
        Self::new(Method::PUT, url, body)
    }

    /// Sends the request once and returns the server [`Response`].
    ///
    /// Responses with an error status code are returned as they are.
    ///
    /// # Errors
    ///
    /// Network failures prevent the request from being sent, in which case
    /// a [`crate::error::ErrorKind::Transport`] error is returned.
    pub async fn send(self, http: &HttpClient) -> Result<Response> {
        let Self { method, url, body } = self;

        let builder = http.request(method, &url);
        let builder = match body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart { boundary, content } => builder
                .header(
                    CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(content),
        };

        let response = builder.send().await?;
        debug!("{} answered with {}", response.url().path(), response.status());

        Ok(Response::new(response))
    }
}

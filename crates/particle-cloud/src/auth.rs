use reqwest::Client as HttpClient;

use crate::config::Config;
use crate::error::Result;
use crate::path;
use crate::request::Request;
use crate::response::Response;
use crate::url;

/// Builds the request listing all access tokens.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn list(config: &Config) -> Result<Request> {
    Ok(Request::get(url::build(config, &path!["access_tokens"])?))
}

/// Builds the request deleting an access token.
///
/// # Errors
///
/// Fails when the url cannot be built, for example when `token` is empty.
pub fn delete(config: &Config, token: &str) -> Result<Request> {
    Ok(Request::delete(url::build(
        config,
        &path!["access_tokens", token],
    )?))
}

/// A sender for access token requests.
#[derive(Debug, Clone, Copy)]
pub struct AuthSender<'client> {
    config: &'client Config,
    http: &'client HttpClient,
}

impl<'client> AuthSender<'client> {
    /// Lists all access tokens.
    ///
    /// The response body is a list of [`crate::models::AccessToken`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn list(&self) -> Result<Response> {
        list(self.config)?.send(self.http).await
    }

    /// Deletes an access token.
    ///
    /// Returns `true` when the server answers with a success status code.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn delete(&self, token: &str) -> Result<bool> {
        let response = delete(self.config, token)?.send(self.http).await?;
        Ok(response.is_success())
    }

    pub(crate) const fn new(config: &'client Config, http: &'client HttpClient) -> Self {
        Self { config, http }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::config::{ClientOptions, Config};
    use crate::error::ErrorKind;
    use crate::request::{Body, Request};

    use super::{delete, list};

    #[test]
    fn requests() {
        let config = Config::new(ClientOptions::token("abc"));

        assert_eq!(
            list(&config),
            Ok(Request::new(
                Method::GET,
                "https://api.particle.io/v1/access_tokens?access_token=abc".into(),
                Body::Empty,
            ))
        );

        assert_eq!(
            delete(&config, "old"),
            Ok(Request::new(
                Method::DELETE,
                "https://api.particle.io/v1/access_tokens/old?access_token=abc".into(),
                Body::Empty,
            ))
        );
    }

    #[test]
    fn empty_token_argument() {
        let config = Config::new(ClientOptions::token("abc"));

        assert_eq!(
            delete(&config, "").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}

use reqwest::Client as HttpClient;

use crate::config::Config;
use crate::error::Result;
use crate::path;
use crate::request::Request;
use crate::response::Response;
use crate::url;

/// Builds the request listing all organizations of the user.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn list(config: &Config) -> Result<Request> {
    Ok(Request::get(url::build(config, &path!["orgs"])?))
}

/// Builds the request retrieving an organization.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get(config: &Config, slug: &str) -> Result<Request> {
    Ok(Request::get(url::build(config, &path!["orgs", slug])?))
}

/// Builds the request removing a member from an organization team.
///
/// Remembers `slug`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn remove_team_member(config: &mut Config, slug: &str, username: &str) -> Result<Request> {
    config.remember_org_slug(slug);
    Ok(Request::delete(url::build(
        config,
        &path!["orgs", slug, "users", username],
    )?))
}

/// A sender for organization requests.
#[derive(Debug)]
pub struct OrgsSender<'client> {
    config: &'client mut Config,
    http: &'client HttpClient,
}

impl<'client> OrgsSender<'client> {
    /// Lists all organizations.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn list(self) -> Result<Response> {
        list(self.config)?.send(self.http).await
    }

    /// Retrieves an organization.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get(self, slug: &str) -> Result<Response> {
        get(self.config, slug)?.send(self.http).await
    }

    /// Removes a member from an organization team.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn remove_team_member(self, slug: &str, username: &str) -> Result<Response> {
        remove_team_member(self.config, slug, username)?
            .send(self.http)
            .await
    }

    pub(crate) const fn new(config: &'client mut Config, http: &'client HttpClient) -> Self {
        Self { config, http }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::config::{ClientOptions, Config};
    use crate::request::{Body, Request};

    use super::{get, list, remove_team_member};

    #[test]
    fn requests() {
        let mut config = Config::new(ClientOptions::from("abc"));

        assert_eq!(
            list(&config).unwrap().url,
            "https://api.particle.io/v1/orgs?access_token=abc"
        );
        assert_eq!(
            get(&config, "acme").unwrap().url,
            "https://api.particle.io/v1/orgs/acme?access_token=abc"
        );

        assert_eq!(
            remove_team_member(&mut config, "acme", "bob"),
            Ok(Request::new(
                Method::DELETE,
                "https://api.particle.io/v1/orgs/acme/users/bob?access_token=abc".into(),
                Body::Empty,
            ))
        );
        assert_eq!(config.last_org_slug(), "acme");
    }
}

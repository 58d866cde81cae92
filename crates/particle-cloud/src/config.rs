use serde::Deserialize;

use tracing::debug;

/// The default Particle Cloud API host.
pub const DEFAULT_API_HOST: &str = "https://api.particle.io";

/// The default API version.
pub const DEFAULT_API_VERSION: u32 = 1;

/// Options accepted when constructing a [`crate::client::Client`].
///
/// Options can be deserialized from `JSON`, and a bare string is treated as
/// the access token.
///
/// ```
/// use particle_cloud::config::ClientOptions;
///
/// let options: ClientOptions = serde_json::from_str(
///     r#"{ "accessToken": "abc", "version": 1, "debug": true }"#,
/// ).unwrap();
/// assert_eq!(options.token, "abc");
///
/// assert_eq!(ClientOptions::from("abc"), ClientOptions::token("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Access token appended to every request.
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    /// Whether composed URLs and call arguments are logged.
    pub debug: bool,
    /// API version. A zero version falls back to [`DEFAULT_API_VERSION`].
    pub version: u32,
    /// Initial value of the remembered name.
    pub name: String,
    /// Initial value of the remembered device identifier.
    pub id: String,
    /// Whether the caller considers the token authorized.
    pub authorized: bool,
    /// API host, without the version suffix.
    #[serde(alias = "apiHost")]
    pub api_host: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            token: String::new(),
            debug: false,
            version: DEFAULT_API_VERSION,
            name: String::new(),
            id: String::new(),
            authorized: false,
            api_host: DEFAULT_API_HOST.into(),
        }
    }
}

impl ClientOptions {
    /// Creates [`ClientOptions`] containing only an access token.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Sets the API version.
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Enables or disables debug logging.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the API host.
    ///
    /// Useful for self-hosted gateways and local test servers.
    #[must_use]
    pub fn api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }
}

impl From<&str> for ClientOptions {
    fn from(token: &str) -> Self {
        Self::token(token)
    }
}

impl From<String> for ClientOptions {
    fn from(token: String) -> Self {
        Self::token(token)
    }
}

/// The configuration owned by a [`crate::client::Client`].
///
/// Besides the values needed to compose a request, it keeps the last device
/// identifier, name, and organization slug passed to the operations which
/// remember them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    token: String,
    version: u32,
    debug: bool,
    authorized: bool,
    base_url: String,
    last_device_id: String,
    last_name: String,
    last_org_slug: String,
}

impl Config {
    /// Creates a [`Config`] from [`ClientOptions`].
    #[must_use]
    pub fn new(options: ClientOptions) -> Self {
        let version = if options.version == 0 {
            DEFAULT_API_VERSION
        } else {
            options.version
        };

        let base_url = format!(
            "{}/v{version}",
            options.api_host.trim_end_matches('/')
        );

        if options.debug {
            debug!("Base url: {base_url}");
        }

        Self {
            token: options.token,
            version,
            debug: options.debug,
            authorized: options.authorized,
            base_url,
            last_device_id: options.id,
            last_name: options.name,
            last_org_slug: String::new(),
        }
    }

    /// Returns the access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns whether debug logging is enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns whether the access token has been marked as authorized.
    #[must_use]
    pub const fn authorized(&self) -> bool {
        self.authorized
    }

    /// Returns the base url, i.e. `{api_host}/v{version}`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the last remembered device identifier.
    #[must_use]
    pub fn last_device_id(&self) -> &str {
        &self.last_device_id
    }

    /// Returns the last remembered name.
    ///
    /// Function names, device names, and event names share this slot.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the last remembered organization slug.
    #[must_use]
    pub fn last_org_slug(&self) -> &str {
        &self.last_org_slug
    }

    pub(crate) fn authorize(&mut self, token: String) {
        if self.debug {
            debug!("Authorize token: {token}");
        }
        self.token = token;
        self.authorized = true;
    }

    pub(crate) fn remember_device_id(&mut self, id: &str) {
        if self.debug {
            debug!("Device id: {id}");
        }
        id.clone_into(&mut self.last_device_id);
    }

    pub(crate) fn remember_name(&mut self, name: &str) {
        if self.debug {
            debug!("Name: {name}");
        }
        name.clone_into(&mut self.last_name);
    }

    pub(crate) fn remember_org_slug(&mut self, slug: &str) {
        if self.debug {
            debug!("Organization slug: {slug}");
        }
        slug.clone_into(&mut self.last_org_slug);
    }
}

impl From<ClientOptions> for Config {
    fn from(options: ClientOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ClientOptions, Config, DEFAULT_API_HOST};

    #[test]
    fn options_from_json() {
        let options: ClientOptions = serde_json::from_value(json!({
            "accessToken": "abc",
            "debug": true,
            "version": 2,
            "name": "led",
            "id": "42",
            "authorized": true,
        }))
        .unwrap();

        assert_eq!(
            options,
            ClientOptions {
                token: "abc".into(),
                debug: true,
                version: 2,
                name: "led".into(),
                id: "42".into(),
                authorized: true,
                api_host: DEFAULT_API_HOST.into(),
            }
        );

        let options: ClientOptions = serde_json::from_value(json!({ "token": "xyz" })).unwrap();
        assert_eq!(options, ClientOptions::token("xyz"));
    }

    #[test]
    fn bare_token() {
        assert_eq!(ClientOptions::from("abc").token, "abc");
        assert_eq!(ClientOptions::from(String::from("abc")).version, 1);
    }

    #[test]
    fn derived_base_url() {
        let config = Config::new(ClientOptions::token("abc"));
        assert_eq!(config.base_url(), "https://api.particle.io/v1");

        let config = Config::new(ClientOptions::token("abc").version(0));
        assert_eq!(config.version(), 1);
        assert_eq!(config.base_url(), "https://api.particle.io/v1");

        let config = Config::new(
            ClientOptions::token("abc")
                .version(3)
                .api_host("http://127.0.0.1:8080/"),
        );
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/v3");
    }

    #[test]
    fn seeded_and_remembered_state() {
        let mut config = Config::new(ClientOptions {
            id: "1".into(),
            name: "led".into(),
            ..ClientOptions::token("abc")
        });

        assert_eq!(config.last_device_id(), "1");
        assert_eq!(config.last_name(), "led");
        assert_eq!(config.last_org_slug(), "");

        config.remember_device_id("2");
        config.remember_name("digitalwrite");
        config.remember_org_slug("acme");

        assert_eq!(config.last_device_id(), "2");
        assert_eq!(config.last_name(), "digitalwrite");
        assert_eq!(config.last_org_slug(), "acme");
    }

    #[test]
    fn authorize_replaces_token() {
        let mut config = Config::new(ClientOptions::default());
        assert!(!config.authorized());

        config.authorize("new".into());

        assert_eq!(config.token(), "new");
        assert!(config.authorized());
    }
}

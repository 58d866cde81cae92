use reqwest::Client as HttpClient;

use crate::auth::AuthSender;
use crate::config::{ClientOptions, Config};
use crate::devices::DevicesSender;
use crate::events::EventsSender;
use crate::firmware::FirmwareSender;
use crate::orgs::OrgsSender;
use crate::products::ProductsSender;

/// A Particle Cloud client.
///
/// The client owns its [`Config`] and an `HTTP` client. Each capability group
/// is reached through a short-lived sender which borrows the client:
///
/// - [`Client::auth`] for access tokens
/// - [`Client::devices`] for device information, variables, and functions
/// - [`Client::events`] for event streams and publishing
/// - [`Client::firmware`] for firmware updates and device renaming
/// - [`Client::orgs`] and [`Client::products`] for organizations
///
/// Senders of groups which remember the last identifier or name they were
/// called with borrow the client mutably.
///
/// ```no_run
/// # async fn run() -> particle_cloud::error::Result<()> {
/// use particle_cloud::client::Client;
///
/// let mut client = Client::new("access-token");
///
/// let response = client.devices().get("0123456789abcdef", "temperature").await?;
/// println!("{}", response.json().await?);
///
/// assert_eq!(client.config().last_device_id(), "0123456789abcdef");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: HttpClient,
}

impl Client {
    /// Creates a [`Client`] from [`ClientOptions`] or from an access token.
    ///
    /// An empty access token is accepted here, but every request built
    /// afterwards fails until a token is provided with [`Client::authorize`].
    #[must_use]
    #[inline]
    pub fn new(options: impl Into<ClientOptions>) -> Self {
        Self::with_http_client(options, HttpClient::new())
    }

    /// Creates a [`Client`] which sends its requests through the given
    /// `HTTP` client.
    ///
    /// This is the place to configure timeouts, proxies, or connection
    /// pooling, none of which are handled by this crate.
    #[must_use]
    #[inline]
    pub fn with_http_client(options: impl Into<ClientOptions>, http: HttpClient) -> Self {
        Self {
            config: Config::new(options.into()),
            http,
        }
    }

    /// Returns the client [`Config`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the access token and marks it as authorized.
    #[inline]
    pub fn authorize(&mut self, token: impl Into<String>) -> &mut Self {
        self.config.authorize(token.into());
        self
    }

    /// Builds an [`AuthSender`].
    #[must_use]
    pub const fn auth(&self) -> AuthSender<'_> {
        AuthSender::new(&self.config, &self.http)
    }

    /// Builds a [`DevicesSender`].
    #[must_use]
    pub const fn devices(&mut self) -> DevicesSender<'_> {
        DevicesSender::new(&mut self.config, &self.http)
    }

    /// Builds an [`EventsSender`].
    #[must_use]
    pub const fn events(&mut self) -> EventsSender<'_> {
        EventsSender::new(&mut self.config, &self.http)
    }

    /// Builds a [`FirmwareSender`].
    #[must_use]
    pub const fn firmware(&mut self) -> FirmwareSender<'_> {
        FirmwareSender::new(&mut self.config, &self.http)
    }

    /// Builds an [`OrgsSender`].
    #[must_use]
    pub const fn orgs(&mut self) -> OrgsSender<'_> {
        OrgsSender::new(&mut self.config, &self.http)
    }

    /// Builds a [`ProductsSender`].
    #[must_use]
    pub const fn products(&self) -> ProductsSender<'_> {
        ProductsSender::new(&self.config, &self.http)
    }
}

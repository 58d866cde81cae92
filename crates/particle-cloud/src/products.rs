use reqwest::Client as HttpClient;

use crate::config::Config;
use crate::error::Result;
use crate::path;
use crate::request::{Body, Request};
use crate::response::Response;
use crate::url;

/// Builds the request retrieving a product of an organization.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get(config: &Config, org: &str, product: &str) -> Result<Request> {
    Ok(Request::get(url::build(
        config,
        &path!["orgs", org, "products", product],
    )?))
}

/// Builds the request generating a product claim code.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn gen_claim_code(config: &Config, org: &str, product: &str) -> Result<Request> {
    Ok(Request::post(
        url::build(
            config,
            &path!["orgs", org, "products", product, "device_claims"],
        )?,
        Body::Empty,
    ))
}

/// Builds the request removing a device from a product.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn remove_device(config: &Config, org: &str, product: &str, id: &str) -> Result<Request> {
    Ok(Request::delete(url::build(
        config,
        &path!["orgs", org, "products", product, "devices", id],
    )?))
}

/// A sender for product requests.
#[derive(Debug, Clone, Copy)]
pub struct ProductsSender<'client> {
    config: &'client Config,
    http: &'client HttpClient,
}

impl<'client> ProductsSender<'client> {
    /// Retrieves a product.
    ///
    /// The response body contains a [`crate::models::Product`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get(&self, org: &str, product: &str) -> Result<Response> {
        get(self.config, org, product)?.send(self.http).await
    }

    /// Generates a claim code for a product device.
    ///
    /// The response body is a [`crate::models::ClaimCode`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn gen_claim_code(&self, org: &str, product: &str) -> Result<Response> {
        gen_claim_code(self.config, org, product)?
            .send(self.http)
            .await
    }

    /// Removes a device from a product.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn remove_device(&self, org: &str, product: &str, id: &str) -> Result<Response> {
        remove_device(self.config, org, product, id)?
            .send(self.http)
            .await
    }

    pub(crate) const fn new(config: &'client Config, http: &'client HttpClient) -> Self {
        Self { config, http }
    }
}

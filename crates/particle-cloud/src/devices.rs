use reqwest::Client as HttpClient;

use serde_json::json;

use crate::config::Config;
use crate::error::Result;
use crate::path;
use crate::request::{Body, Request};
use crate::response::Response;
use crate::url;

/// Builds the request listing all devices.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn list(config: &Config) -> Result<Request> {
    Ok(Request::get(url::build(config, &path!["devices"])?))
}

/// Builds the request retrieving the details of a device.
///
/// Remembers `id`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get_info(config: &mut Config, id: &str) -> Result<Request> {
    config.remember_device_id(id);
    Ok(Request::get(url::build(config, &path!["devices", id])?))
}

/// Builds the request reading a device variable.
///
/// Remembers `id`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get(config: &mut Config, id: &str, variable: &str) -> Result<Request> {
    config.remember_device_id(id);
    Ok(Request::get(url::build(
        config,
        &path!["devices", id, variable],
    )?))
}

/// Builds the request calling a device function with an argument.
///
/// Remembers both `id` and `function`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn call(config: &mut Config, id: &str, function: &str, arg: &str) -> Result<Request> {
    config.remember_device_id(id);
    config.remember_name(function);
    Ok(Request::post(
        url::build(config, &path!["devices", id, function])?,
        Body::Json(json!({ "arg": arg })),
    ))
}

/// Builds the request claiming a device for the current user.
///
/// Remembers `id`.
///
/// # Errors
///
/// Fails when the url cannot be built.
#[cfg(feature = "claim")]
pub fn claim(config: &mut Config, id: &str) -> Result<Request> {
    config.remember_device_id(id);
    Ok(Request::post(
        url::build(config, &path!["devices"])?,
        Body::Json(json!({ "id": id })),
    ))
}

/// Builds the request generating a claim code for a device.
///
/// Remembers `id`.
///
/// # Errors
///
/// Fails when the url cannot be built.
#[cfg(feature = "claim")]
pub fn make_claim_code(config: &mut Config, id: &str) -> Result<Request> {
    config.remember_device_id(id);
    Ok(Request::post(
        url::build(config, &path!["device_claims"])?,
        Body::Empty,
    ))
}

/// A sender for device requests.
#[derive(Debug)]
pub struct DevicesSender<'client> {
    config: &'client mut Config,
    http: &'client HttpClient,
}

impl<'client> DevicesSender<'client> {
    /// Lists all devices.
    ///
    /// The response body is a list of [`crate::models::Device`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn list(self) -> Result<Response> {
        list(self.config)?.send(self.http).await
    }

    /// Retrieves the details of a device.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get_info(self, id: &str) -> Result<Response> {
        get_info(self.config, id)?.send(self.http).await
    }

    /// Reads a device variable.
    ///
    /// The response body is a [`crate::models::Variable`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get(self, id: &str, variable: &str) -> Result<Response> {
        get(self.config, id, variable)?.send(self.http).await
    }

    /// Calls a device function.
    ///
    /// The response body is a [`crate::models::FunctionResult`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn call(self, id: &str, function: &str, arg: &str) -> Result<Response> {
        call(self.config, id, function, arg)?.send(self.http).await
    }

    /// Claims a device.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    #[cfg(feature = "claim")]
    pub async fn claim(self, id: &str) -> Result<Response> {
        claim(self.config, id)?.send(self.http).await
    }

    /// Generates a claim code.
    ///
    /// The response body is a [`crate::models::ClaimCode`].
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    #[cfg(feature = "claim")]
    pub async fn make_claim_code(self, id: &str) -> Result<Response> {
        make_claim_code(self.config, id)?.send(self.http).await
    }

    pub(crate) const fn new(config: &'client mut Config, http: &'client HttpClient) -> Self {
        Self { config, http }
    }
}

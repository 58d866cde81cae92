use reqwest::Client as HttpClient;

use serde_json::json;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path;
use crate::request::{Body, Request};
use crate::response::Response;
use crate::url;

/// Boundary of the multipart body used to flash source code.
pub const FLASH_BOUNDARY: &str = "---------------------------7da24f2e50046";

/// File name under which source code is uploaded.
pub const FLASH_FILENAME: &str = "code.cpp";

fn multipart_body(file: &str) -> String {
    format!(
        "--{FLASH_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{FLASH_FILENAME}\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {file}\r\n\
         --{FLASH_BOUNDARY}--"
    )
}

/// Builds the request triggering a firmware update on a device.
///
/// Remembers `id`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn update(config: &mut Config, id: &str) -> Result<Request> {
    config.remember_device_id(id);
    Ok(Request::put(
        url::build(config, &path!["devices", id])?,
        Body::Empty,
    ))
}

/// Builds the request renaming a device.
///
/// Remembers both `id` and `name`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn rename(config: &mut Config, id: &str, name: &str) -> Result<Request> {
    config.remember_device_id(id);
    config.remember_name(name);
    Ok(Request::put(
        url::build(config, &path!["devices", id])?,
        Body::Json(json!({ "name": name })),
    ))
}

/// Builds the request flashing source code to a device.
///
/// The source code is uploaded as a single `multipart/form-data` part named
/// `file`, with [`FLASH_FILENAME`] as file name.
///
/// The cloud compiles the code and flashes the result over the air. A
/// compilation error or a wrong platform may leave the device unusable, so
/// this operation should not be used on production devices.
///
/// # Errors
///
/// - [`crate::error::ErrorKind::MissingArgument`] when `id` or `file` is
///   empty
/// - any url building error
pub fn flash_source_code(config: &Config, id: &str, file: &str) -> Result<Request> {
    if id.is_empty() {
        return Err(Error::missing_argument(
            "An id is necessary for flashing source code.",
        ));
    }
    if file.is_empty() {
        return Err(Error::missing_argument(
            "Source code is necessary for flashing a device.",
        ));
    }

    let url = url::build(config, &path!["devices", id])?;

    let content = multipart_body(file);
    if config.debug() {
        debug!("Flash body: {content}");
    }
    warn!("Flashing source code to device {id}");

    Ok(Request::put(
        url,
        Body::Multipart {
            boundary: FLASH_BOUNDARY,
            content,
        },
    ))
}

/// A sender for firmware requests.
#[derive(Debug)]
pub struct FirmwareSender<'client> {
    config: &'client mut Config,
    http: &'client HttpClient,
}

impl<'client> FirmwareSender<'client> {
    /// Triggers a firmware update.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn update(self, id: &str) -> Result<Response> {
        update(self.config, id)?.send(self.http).await
    }

    /// Renames a device.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn rename(self, id: &str, name: &str) -> Result<Response> {
        rename(self.config, id, name)?.send(self.http).await
    }

    /// Flashes source code to a device.
    ///
    /// See [`flash_source_code`] for the risks of this operation.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn flash_source_code(self, id: &str, file: &str) -> Result<Response> {
        flash_source_code(self.config, id, file)?
            .send(self.http)
            .await
    }

    pub(crate) const fn new(config: &'client mut Config, http: &'client HttpClient) -> Self {
        Self { config, http }
    }
}

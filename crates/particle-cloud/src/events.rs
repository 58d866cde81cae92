use reqwest::Client as HttpClient;

use serde_json::{Map, Value, json};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path;
use crate::request::{Body, Request};
use crate::response::Response;
use crate::url::{self, Segment};

// An empty prefix selects the whole stream.
fn prefix(prefix: Option<&str>) -> Option<&str> {
    prefix.filter(|prefix| !prefix.is_empty())
}

fn stream_request<'a>(
    config: &Config,
    mut segments: Vec<Segment<'a>>,
    prefix: Option<&'a str>,
) -> Result<Request> {
    if let Some(prefix) = prefix {
        if config.debug() {
            debug!("Event prefix: {prefix}");
        }
        segments.push(prefix.into());
    }
    Ok(Request::get(url::build(config, &segments)?))
}

/// Builds the request opening the public event stream, optionally filtered
/// by an event name prefix.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get_stream(config: &Config, event_prefix: Option<&str>) -> Result<Request> {
    stream_request(config, path!["events"].into(), prefix(event_prefix))
}

/// Builds the request opening the event stream of all the devices owned by
/// the user, optionally filtered by an event name prefix.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get_devices_stream(config: &Config, event_prefix: Option<&str>) -> Result<Request> {
    stream_request(
        config,
        path!["devices", "events"].into(),
        prefix(event_prefix),
    )
}

/// Builds the request opening the event stream of a single device,
/// optionally filtered by an event name prefix.
///
/// Remembers `id`.
///
/// # Errors
///
/// Fails when the url cannot be built.
pub fn get_device_stream(
    config: &mut Config,
    id: &str,
    event_prefix: Option<&str>,
) -> Result<Request> {
    config.remember_device_id(id);
    stream_request(
        config,
        path!["devices", id, "events"].into(),
        prefix(event_prefix),
    )
}

// Values replaced by an empty object when publishing.
fn is_blank(data: &Value) -> bool {
    match data {
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Builds the request publishing an event.
///
/// A missing `data`, as well as `false`, `0`, or an empty string, is sent as
/// an empty object, while `null` is rejected. `ttl` is only sent when it is
/// greater than zero. The event name is remembered but it is not part of
/// the request.
///
/// # Errors
///
/// Fails when `data` is `null` or when the url cannot be built.
pub fn publish(
    config: &mut Config,
    name: &str,
    data: Option<Value>,
    private: bool,
    ttl: Option<u32>,
) -> Result<Request> {
    config.remember_name(name);

    let data = match data {
        Some(data) if !is_blank(&data) => data,
        _ => Value::Object(Map::new()),
    };
    if data.is_null() {
        return Err(Error::invalid_argument("You must provide data to send."));
    }

    let mut body = json!({
        "data": data,
        "p": private,
    });
    if let Some(ttl) = ttl.filter(|ttl| *ttl > 0) {
        body["ttl"] = ttl.into();
    }

    if config.debug() {
        debug!("Event body: {body}");
    }

    Ok(Request::post(
        url::build(config, &path!["devices", "events"])?,
        Body::Json(body),
    ))
}

/// A sender for event requests.
///
/// Event streams are returned as raw [`Response`]s, with the `stream`
/// feature they can be read chunk by chunk.
#[derive(Debug)]
pub struct EventsSender<'client> {
    config: &'client mut Config,
    http: &'client HttpClient,
}

impl<'client> EventsSender<'client> {
    /// Opens the public event stream.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get_stream(self, event_prefix: Option<&str>) -> Result<Response> {
        get_stream(self.config, event_prefix)?.send(self.http).await
    }

    /// Opens the event stream of the user devices.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get_devices_stream(self, event_prefix: Option<&str>) -> Result<Response> {
        get_devices_stream(self.config, event_prefix)?
            .send(self.http)
            .await
    }

    /// Opens the event stream of a device.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn get_device_stream(
        self,
        id: &str,
        event_prefix: Option<&str>,
    ) -> Result<Response> {
        get_device_stream(self.config, id, event_prefix)?
            .send(self.http)
            .await
    }

    /// Publishes an event.
    ///
    /// # Errors
    ///
    /// Validation and network failures.
    pub async fn publish(
        self,
        name: &str,
        data: Option<Value>,
        private: bool,
        ttl: Option<u32>,
    ) -> Result<Response> {
        publish(self.config, name, data, private, ttl)?
            .send(self.http)
            .await
    }

    pub(crate) const fn new(config: &'client mut Config, http: &'client HttpClient) -> Self {
        Self { config, http }
    }
}

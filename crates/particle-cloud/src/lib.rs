//! The `particle-cloud` library crate provides a thin asynchronous client for
//! the Particle Cloud `REST` API.
//!
//! Each operation composes an url from a set of path segments, appends the
//! access token, and sends a single `HTTP` request. The response is handed
//! back to the caller without being inspected.
//!
//! The supported capabilities are grouped as follows:
//!
//! - Access tokens: listing and deletion
//! - Devices: listing, details, variables, functions, and claiming
//! - Events: public, user, and device event streams, and publishing
//! - Firmware: updates, renaming, and source code flashing
//! - Organizations and their products
//!
//! Every capability module exposes pure functions which build a
//! [`request::Request`] from a [`config::Config`], so arguments are validated
//! before any network activity. The [`client::Client`] owns the configuration
//! and sends the requests through `reqwest`.
//!
//! Retries, timeouts, caching, and event stream parsing are left to the
//! caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Access token management.
pub mod auth;
/// The Particle Cloud client.
pub mod client;
/// Client configuration.
pub mod config;
/// Device information, variables, and functions.
pub mod devices;
/// Error management.
pub mod error;
/// Event streams and publishing.
pub mod events;
/// Firmware updates.
pub mod firmware;
/// Response models for the most common payloads.
pub mod models;
/// Organization management.
pub mod orgs;
/// Product management.
pub mod products;
/// Request data and the associated methods.
pub mod request;
/// Raw response handling.
pub mod response;
/// Url composition.
pub mod url;

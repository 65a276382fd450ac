//! Box-office API client.
//!
//! The box office is the organization's backend of record: identity and
//! roles, musicians and executives, news, merchandise, concerts, tickets,
//! and orders. The site consumes it over HTTP; every response body is a
//! JSON envelope of the shape `{ "data": ... }`.
//!
//! Public content responses are cached in-memory via `moka` (5-minute TTL).
//! Authenticated calls (member and console endpoints) carry the acting
//! user's bearer token and are never cached.

mod cache;
mod client;
pub mod types;

pub use client::BoxOfficeClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when calling the box-office API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport or body decoding failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The box office rejected the caller's credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    Status {
        /// HTTP status code returned.
        status: u16,
        /// The endpoint path that failed.
        endpoint: String,
    },
}

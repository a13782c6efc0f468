//! Error types for the analytics API client.
//!
//! # Design
//! The taxonomy is three-way and the dispatcher never recovers on its own:
//! `Transport` (the request never produced an HTTP status), `Service` (the
//! server answered with a non-2xx status, optionally with a decoded vendor
//! error envelope), and `Decoding` (a 2xx body did not match the expected
//! model — surfaced rather than swallowed, since dropping a malformed payload
//! would hide upstream data bugs). A 401 is just `Service { status: 401 }`;
//! re-authentication is the caller's decision.

use serde::Deserialize;

/// Errors returned by [`ApiClient`](crate::ApiClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed: connectivity, DNS, TLS, or timeout.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server returned a non-2xx status, with the vendor error envelope
    /// when the body decoded as one.
    #[error("service error: HTTP {status}")]
    Service {
        status: u16,
        body: Option<ServiceError>,
    },

    /// A 2xx response body did not match the expected response model.
    #[error("response decoding failed")]
    Decoding(#[source] serde_json::Error),
}

impl ApiError {
    /// True for `Service { status: 401, .. }` — the credential is invalid or
    /// expired and the caller should re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Service { status: 401, .. })
    }
}

/// Vendor error envelope carried on non-2xx responses.
///
/// Both fields are optional on the wire; an error body that is not this shape
/// at all degrades to `Service { body: None }` rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    pub code: Option<i64>,
    pub message: Option<String>,
}

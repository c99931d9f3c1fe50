//! Failure classes for REST calls.
//!
//! None of these are fatal: pages surface them as a transient toast and keep
//! rendering whatever data they already had.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed request against the reports backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

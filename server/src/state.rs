//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the reports backend.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream base URL, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state from validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend of the HTTP client fails to
    /// initialise.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.reports_api_url.as_str()) })
    }
}

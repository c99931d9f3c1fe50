//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so local development can keep
//! the upstream URL out of the shell environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the reports backend, without a trailing slash.
    pub reports_api_url: String,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `REPORTS_API_URL`: base URL that `/api/*` requests are forwarded to
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reports_api_url = var("REPORTS_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var: "REPORTS_API_URL" })?;
        if !(reports_api_url.starts_with("http://") || reports_api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "REPORTS_API_URL", value: reports_api_url });
        }

        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let proxy_timeout_secs = parse_or("PROXY_TIMEOUT_SECS", var("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;

        Ok(Self { port, reports_api_url, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

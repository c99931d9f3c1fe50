//! REST helpers for the reports backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/[`ApiError::Unavailable`] since
//! these requests are only issued from the browser.
//!
//! Each call is a single request: no retry, no coalescing. Sequencing of the
//! result into page state is handled by `state::fetch`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Filter, Report, SubmissionsPage, User};
#[cfg(feature = "hydrate")]
use crate::config::remote_routes;

/// Flatten a filter into query pairs. Strings are sent raw, `null` entries are
/// dropped, and arrays/objects are sent as compact JSON.
#[cfg(any(test, feature = "hydrate"))]
fn filter_query(filter: &Filter) -> Vec<(String, String)> {
    filter
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str, query: &[(String, String)]) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>(remote_routes::CURRENT_USER, &[]).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch every report visible to the current user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a report array.
pub async fn fetch_reports() -> Result<Vec<Report>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(remote_routes::REPORTS, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Search a report's submissions with `filter` passed as query parameters.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a `{columns, data}` object.
pub async fn search_submissions(report_id: &str, filter: &Filter) -> Result<SubmissionsPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::report_submissions_resource(report_id);
        get_json(&url, &filter_query(filter)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (report_id, filter);
        Err(ApiError::Unavailable)
    }
}

//! `/api/*` forwarding to the reports backend.
//!
//! The browser only ever talks to this host; the handler strips the `/api`
//! prefix, replays method, query, body and a small header allowlist against
//! the upstream, and copies the status and body back.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub const API_PREFIX: &str = "/api";

/// Request headers worth forwarding; hop-by-hop and host headers are dropped.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 5] = [
    header::ACCEPT,
    header::ACCEPT_LANGUAGE,
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::COOKIE,
];

const FORWARDED_RESPONSE_HEADERS: [HeaderName; 4] = [
    header::CACHE_CONTROL,
    header::CONTENT_TYPE,
    header::ETAG,
    header::SET_COOKIE,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream timed out")]
    Timeout,
    #[error("upstream unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Map an incoming `/api/...` URI onto the upstream base.
///
/// `/api/reports/7/submissions?limit=5` → `{base}/reports/7/submissions?limit=5`.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path = uri.path();
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let rest = if rest.is_empty() { "/" } else { rest };
    match uri.query() {
        Some(q) if !q.is_empty() => format!("{base}{rest}?{q}"),
        _ => format!("{base}{rest}"),
    }
}

/// Copy the allowlisted headers from `source`.
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(%method, %url, error = %err, "proxy request failed");
            err
        })?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| {
        let err = ProxyError::from_reqwest(&e);
        tracing::warn!(%method, %url, error = %err, "proxy body read failed");
        err
    })?;

    tracing::debug!(%method, %url, status = status.as_u16(), bytes = bytes.len(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

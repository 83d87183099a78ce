//! `/api/*` forwarder to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client talks to `/api` on its own origin. This handler relays
//! those calls to `BACKEND_URL` unchanged so the bundle needs no CORS setup.
//! Status codes (including 401) pass through untouched; the client decides
//! what they mean.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers relayed to the backend. Cookies and host headers stay local.
const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Join the backend base with the captured tail and the raw query string.
fn backend_target(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(base) = state.backend_url.as_deref() else {
        return (StatusCode::BAD_GATEWAY, "backend not configured").into_response();
    };
    let url = backend_target(base, &path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url).body(body);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }

    match request.send().await {
        Ok(resp) => relay(resp).await,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "backend request failed");
            (StatusCode::BAD_GATEWAY, "backend unreachable").into_response()
        }
    }
}

async fn relay(resp: reqwest::Response) -> Response {
    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    match resp.bytes().await {
        Ok(bytes) => {
            if status.is_server_error() {
                tracing::warn!(%status, "backend returned server error");
            }
            let mut out = (status, bytes).into_response();
            if let Some(content_type) = content_type {
                out.headers_mut().insert(header::CONTENT_TYPE, content_type);
            }
            out
        }
        Err(e) => {
            tracing::warn!(error = %e, %status, "backend response body unreadable");
            (StatusCode::BAD_GATEWAY, "backend response unreadable").into_response()
        }
    }
}

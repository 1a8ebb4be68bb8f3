//! CORS stage of the request gate.
//!
//! Only one origin is ever allowed, and it is allowed with credentials so
//! the browser sends the session cookie. Every `OPTIONS` request is
//! answered here with `204 No Content`, whatever its origin or session.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use notes_core::config::CorsConfig;

const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// Attaches CORS headers for the configured origin and short-circuits
/// preflight requests.
pub async fn cors(State(config): State<Arc<CorsConfig>>, request: Request, next: Next) -> Response {
    let allowed = allowed_origin(&config, request.headers());
    let preflight = request.method() == Method::OPTIONS;

    let mut response = if preflight {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = allowed {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(VARY, HeaderValue::from_static("Origin"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
    }

    response
}

/// The request's `Origin` if it matches the configured one exactly. An
/// empty configured origin disables CORS headers entirely.
fn allowed_origin(config: &CorsConfig, headers: &HeaderMap) -> Option<HeaderValue> {
    if config.allowed_origin.is_empty() {
        return None;
    }
    headers
        .get(ORIGIN)
        .filter(|origin| origin.as_bytes() == config.allowed_origin.as_bytes())
        .cloned()
}

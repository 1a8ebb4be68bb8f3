//! Access log for every request that reaches the router.

use std::time::Instant;

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

/// Logs method, path, status and latency. Server errors are logged at
/// `warn`; health probes and preflights only at `debug`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let quiet = method == Method::OPTIONS || path == "/health";
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, status, elapsed_ms, "Request failed");
    } else if quiet {
        debug!(%method, %path, status, elapsed_ms, "Request");
    } else {
        info!(%method, %path, status, elapsed_ms, "Request");
    }

    response
}

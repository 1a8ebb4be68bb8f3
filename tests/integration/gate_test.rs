//! Request gate integration tests: CORS, preflight, and error bodies

use axum::http::StatusCode;

use crate::helpers::TestApp;

const ORIGIN: &str = "http://localhost:5173";

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "ok");
}

#[tokio::test]
async fn test_health_fails_when_store_is_down() {
    let app = TestApp::new().await;
    app.state.db.close().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "Internal server error");
}

#[tokio::test]
async fn test_preflight_skips_session() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers(
            "OPTIONS",
            "/api/admin/users",
            None,
            &[
                ("origin", ORIGIN),
                ("access-control-request-method", "GET"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.headers["access-control-allow-origin"], ORIGIN);
    assert_eq!(response.headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_preflight_from_other_origin_has_no_cors_headers() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers(
            "OPTIONS",
            "/api/notes",
            None,
            &[("origin", "http://evil.example")],
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_cors_headers_on_error_responses() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers("GET", "/api/me", None, &[("origin", ORIGIN)])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers["access-control-allow-origin"], ORIGIN);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers("POST", "/api/login", None, &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

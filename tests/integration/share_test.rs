//! Share link integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn setup() -> (TestApp, String, i64) {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", "secret123", false).await;
    let cookie = app.login("alice@example.com", "secret123").await;

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({ "title": "Shared", "content": "hello" })),
            Some(&cookie),
        )
        .await;
    let id = response.body["id"].as_i64().expect("id");
    (app, cookie, id)
}

#[tokio::test]
async fn test_enable_share_and_read_publicly() {
    let (app, cookie, id) = setup().await;

    let grant = app
        .request("POST", &format!("/api/notes/{id}/share"), None, Some(&cookie))
        .await;
    assert_eq!(grant.status, StatusCode::OK);

    let token = grant.body["token"].as_str().expect("token").to_string();
    assert_eq!(token.len(), 32);
    assert_eq!(grant.body["shareUrl"], format!("/share/{token}"));

    let public = app
        .request("GET", &format!("/api/share/{token}"), None, None)
        .await;
    assert_eq!(public.status, StatusCode::OK);
    assert_eq!(public.body["title"], "Shared");
    assert_eq!(public.body["content"], "hello");

    let detail = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(detail.body["shareUrl"], format!("/share/{token}"));
}

#[tokio::test]
async fn test_disable_then_reenable_keeps_token() {
    let (app, cookie, id) = setup().await;
    let share = format!("/api/notes/{id}/share");

    let first = app.request("POST", &share, None, Some(&cookie)).await;
    let token = first.body["token"].as_str().expect("token").to_string();

    let disabled = app
        .request("POST", &format!("{share}/disable"), None, Some(&cookie))
        .await;
    assert_eq!(disabled.status, StatusCode::NO_CONTENT);

    let public = app
        .request("GET", &format!("/api/share/{token}"), None, None)
        .await;
    assert_eq!(public.status, StatusCode::NOT_FOUND);

    let detail = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&cookie))
        .await;
    assert!(detail.body.get("shareUrl").is_none());

    let again = app.request("POST", &share, None, Some(&cookie)).await;
    assert_eq!(again.body["token"], token);

    let public = app
        .request("GET", &format!("/api/share/{token}"), None, None)
        .await;
    assert_eq!(public.status, StatusCode::OK);
}

#[tokio::test]
async fn test_only_owner_controls_sharing() {
    let (app, _, id) = setup().await;
    app.create_user("bob@example.com", "secret123", false).await;
    let bob = app.login("bob@example.com", "secret123").await;

    let enable = app
        .request("POST", &format!("/api/notes/{id}/share"), None, Some(&bob))
        .await;
    assert_eq!(enable.status, StatusCode::NOT_FOUND);

    let disable = app
        .request(
            "POST",
            &format!("/api/notes/{id}/share/disable"),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(disable.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/share/does-not-exist", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_deleting_note_revokes_link() {
    let (app, cookie, id) = setup().await;

    let grant = app
        .request("POST", &format!("/api/notes/{id}/share"), None, Some(&cookie))
        .await;
    let token = grant.body["token"].as_str().expect("token").to_string();

    app.request("DELETE", &format!("/api/notes/{id}"), None, Some(&cookie))
        .await;

    let public = app
        .request("GET", &format!("/api/share/{token}"), None, None)
        .await;
    assert_eq!(public.status, StatusCode::NOT_FOUND);
}

//! Note CRUD integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_note(app: &TestApp, cookie: &str, title: &str) -> i64 {
    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(json!({ "title": title, "content": "body" })),
            Some(cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["id"].as_i64().expect("id")
}

#[tokio::test]
async fn test_note_crud_round() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", "secret123", false).await;
    let cookie = app.login("alice@example.com", "secret123").await;

    let id = create_note(&app, &cookie, "First").await;

    let fetched = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "First");
    assert_eq!(fetched.body["content"], "body");
    assert!(fetched.body.get("shareUrl").is_none());

    let updated = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(json!({ "title": "Renamed", "content": "new body" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NO_CONTENT);

    let list = app.request("GET", "/api/notes", None, Some(&cookie)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body[0]["title"], "Renamed");

    let deleted = app
        .request("DELETE", &format!("/api/notes/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notes_are_private_to_owner() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", "secret123", false).await;
    app.create_user("bob@example.com", "secret123", true).await;
    let alice = app.login("alice@example.com", "secret123").await;
    let bob = app.login("bob@example.com", "secret123").await;

    let id = create_note(&app, &alice, "Private").await;
    let path = format!("/api/notes/{id}");

    let read = app.request("GET", &path, None, Some(&bob)).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let update = app
        .request("PUT", &path, Some(json!({ "title": "x", "content": "y" })), Some(&bob))
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let bob_list = app.request("GET", "/api/notes", None, Some(&bob)).await;
    assert_eq!(bob_list.body, json!([]));
}

#[tokio::test]
async fn test_notes_require_session() {
    let app = TestApp::new().await;

    let list = app.request("GET", "/api/notes", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let create = app
        .request("POST", "/api/notes", Some(json!({ "title": "t" })), None)
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_note_id_is_bad_request() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", "secret123", false).await;
    let cookie = app.login("alice@example.com", "secret123").await;

    let response = app
        .request("GET", "/api/notes/not-a-number", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let negative = app.request("GET", "/api/notes/-3", None, Some(&cookie)).await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
}

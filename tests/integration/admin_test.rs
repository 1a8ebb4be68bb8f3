//! Admin user-management integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn admin_and_user(app: &TestApp) -> (i64, String, i64, String) {
    let admin_id = app.create_user("admin@example.com", "adminpass", true).await;
    let user_id = app.create_user("user@example.com", "userpass", false).await;
    let admin_cookie = app.login("admin@example.com", "adminpass").await;
    let user_cookie = app.login("user@example.com", "userpass").await;
    (admin_id, admin_cookie, user_id, user_cookie)
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let app = TestApp::new().await;

    let list = app.request("GET", "/api/admin/users", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let create = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({ "email": "x@example.com", "password": "secret123" })),
            None,
        )
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let app = TestApp::new().await;
    let (admin_id, _, _, user_cookie) = admin_and_user(&app).await;

    let list = app
        .request("GET", "/api/admin/users", None, Some(&user_cookie))
        .await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);
    assert_eq!(list.error_code(), "FORBIDDEN");

    let create = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({ "email": "x@example.com", "password": "secret123" })),
            Some(&user_cookie),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);

    let promote = app
        .request(
            "PUT",
            &format!("/api/admin/users/{admin_id}/admin"),
            Some(json!({ "isAdmin": false })),
            Some(&user_cookie),
        )
        .await;
    assert_eq!(promote.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_users_in_id_order() {
    let app = TestApp::new().await;
    let (admin_id, admin_cookie, user_id, _) = admin_and_user(&app).await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&admin_cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().expect("array body");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], admin_id);
    assert_eq!(users[0]["isAdmin"], true);
    assert_eq!(users[1]["id"], user_id);
    assert_eq!(users[1]["email"], "user@example.com");
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
async fn test_admin_creates_user() {
    let app = TestApp::new().await;
    let (_, admin_cookie, _, _) = admin_and_user(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({ "email": "Carol@Example.com", "password": "carolpass", "isAdmin": true })),
            Some(&admin_cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "carol@example.com");
    assert_eq!(response.body["isAdmin"], true);

    let cookie = app.login("carol@example.com", "carolpass").await;
    let me = app.request("GET", "/api/me", None, Some(&cookie)).await;
    assert_eq!(me.body["isAdmin"], true);
}

#[tokio::test]
async fn test_admin_create_duplicate_conflicts() {
    let app = TestApp::new().await;
    let (_, admin_cookie, _, _) = admin_and_user(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({ "email": "user@example.com", "password": "another1" })),
            Some(&admin_cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_promotes_and_demotes_others() {
    let app = TestApp::new().await;
    let (_, admin_cookie, user_id, user_cookie) = admin_and_user(&app).await;
    let path = format!("/api/admin/users/{user_id}/admin");

    let promote = app
        .request("PUT", &path, Some(json!({ "isAdmin": true })), Some(&admin_cookie))
        .await;
    assert_eq!(promote.status, StatusCode::NO_CONTENT);

    // Admin status is read per request, so the existing session sees it.
    let list = app
        .request("GET", "/api/admin/users", None, Some(&user_cookie))
        .await;
    assert_eq!(list.status, StatusCode::OK);

    let demote = app
        .request("PUT", &path, Some(json!({ "isAdmin": false })), Some(&admin_cookie))
        .await;
    assert_eq!(demote.status, StatusCode::NO_CONTENT);

    let list = app
        .request("GET", "/api/admin/users", None, Some(&user_cookie))
        .await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_demote_self() {
    let app = TestApp::new().await;
    let (admin_id, admin_cookie, _, _) = admin_and_user(&app).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{admin_id}/admin"),
            Some(json!({ "isAdmin": false })),
            Some(&admin_cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let me = app.request("GET", "/api/me", None, Some(&admin_cookie)).await;
    assert_eq!(me.body["isAdmin"], true);
}

#[tokio::test]
async fn test_set_admin_unknown_or_bad_id() {
    let app = TestApp::new().await;
    let (_, admin_cookie, _, _) = admin_and_user(&app).await;

    let unknown = app
        .request(
            "PUT",
            "/api/admin/users/9999/admin",
            Some(json!({ "isAdmin": true })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request(
            "PUT",
            "/api/admin/users/abc/admin",
            Some(json!({ "isAdmin": true })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

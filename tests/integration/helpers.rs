//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use notes_api::{AppState, build_app, build_state};
use notes_core::config::{AppConfig, DatabaseConfig};
use notes_core::traits::ManualClock;
use notes_database::{DatabasePool, migration};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for seeding data through the services
    pub state: AppState,
    /// Clock every service reads; advance it to expire sessions
    pub clock: Arc<ManualClock>,
}

/// Configuration used by every test app: in-memory store, registration on.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    config.auth.allow_registration = true;
    config
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application with a custom configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let clock = Arc::new(ManualClock::default());
        let state = build_state(config, db, clock.clone());
        let router = build_app(state.clone());

        Self {
            router,
            state,
            clock,
        }
    }

    /// Create a user directly through the credential store and return its id
    pub async fn create_user(&self, email: &str, password: &str, is_admin: bool) -> i64 {
        self.state
            .user_service
            .create(email, password, is_admin)
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Login and return the `name=value` pair to send back as `Cookie`
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::NO_CONTENT,
            "Login failed: {:?}",
            response.body
        );

        response
            .cookie_pair()
            .expect("No session cookie in login response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut headers = Vec::new();
        if let Some(cookie) = cookie {
            headers.push((header::COOKIE.as_str(), cookie));
        }
        self.request_with_headers(method, path, body, &headers).await
    }

    /// Make an HTTP request with extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        for (name, value) in extra_headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The full `Set-Cookie` header, if any
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// The `name=value` part of `Set-Cookie`
    pub fn cookie_pair(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next().map(|pair| pair.trim().to_string()))
    }

    /// Asserts the standard error body and returns its code
    pub fn error_code(&self) -> &str {
        assert!(
            self.body.get("message").and_then(Value::as_str).is_some(),
            "missing error message in {:?}",
            self.body
        );
        self.body
            .get("error")
            .and_then(Value::as_str)
            .expect("missing error code")
    }
}

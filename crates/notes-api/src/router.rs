//! Route definitions for the notes HTTP API.
//!
//! Public routes and identity routes are built separately so the session
//! stage wraps only the latter. Admin routes additionally carry the admin
//! stage, nested inside the session stage.

use std::sync::Arc;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let identity_routes = Router::new()
        .route("/me", get(handlers::auth::me))
        .merge(note_routes())
        .nest("/admin", admin_routes(state.clone()))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::require_session,
        ));

    let api_routes = public_routes(&state).merge(identity_routes);

    let cors_config = Arc::new(state.config.server.cors.clone());

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            cors_config,
            middleware::cors::cors,
        ))
        .with_state(state)
}

/// Login, logout, public share reads, and registration when enabled
fn public_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/share/{token}", get(handlers::share::get_shared));

    if state.config.auth.allow_registration {
        router.route("/register", post(handlers::auth::register))
    } else {
        router
    }
}

/// Note CRUD and share toggles
fn note_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(handlers::note::list_notes).post(handlers::note::create_note),
        )
        .route(
            "/notes/{id}",
            get(handlers::note::get_note)
                .put(handlers::note::update_note)
                .delete(handlers::note::delete_note),
        )
        .route("/notes/{id}/share", post(handlers::share::enable_share))
        .route(
            "/notes/{id}/share/disable",
            post(handlers::share::disable_share),
        )
}

/// Admin user management
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::admin::users::list_users).post(handlers::admin::users::create_user),
        )
        .route("/users/{id}/admin", put(handlers::admin::users::set_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::admin::require_admin,
        ))
}

//! Application builder: wires repositories, services and state, then the
//! router and middleware, into an Axum app.

use std::sync::Arc;

use axum::Router;

use notes_auth::password::{PasswordHasher, PasswordValidator};
use notes_auth::session::SessionManager;
use notes_core::config::AppConfig;
use notes_core::traits::Clock;
use notes_database::DatabasePool;
use notes_database::repositories::{
    NoteRepository, SessionRepository, ShareRepository, UserRepository,
};
use notes_service::{AdminService, NoteService, ShareService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state over an already migrated database.
pub fn build_state(config: AppConfig, db: DatabasePool, clock: Arc<dyn Clock>) -> AppState {
    let pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(pool.clone()));
    let note_repo = Arc::new(NoteRepository::new(pool.clone()));
    let share_repo = Arc::new(ShareRepository::new(pool));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&session_repo),
        Arc::clone(&clock),
    ));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        password_hasher,
        password_validator,
        Arc::clone(&clock),
    ));
    let admin_service = Arc::new(AdminService::new(Arc::clone(&user_service)));
    let note_service = Arc::new(NoteService::new(
        Arc::clone(&note_repo),
        Arc::clone(&share_repo),
        Arc::clone(&clock),
    ));
    let share_service = Arc::new(ShareService::new(
        note_repo,
        share_repo,
        Arc::clone(&clock),
    ));

    AppState {
        config: Arc::new(config),
        db,
        clock,
        session_manager,
        user_service,
        admin_service,
        note_service,
        share_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

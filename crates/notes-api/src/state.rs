//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notes_auth::session::SessionManager;
use notes_core::config::AppConfig;
use notes_core::traits::Clock;
use notes_database::DatabasePool;
use notes_service::{AdminService, NoteService, ShareService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Time source for request timestamps
    pub clock: Arc<dyn Clock>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Credential store
    pub user_service: Arc<UserService>,
    /// Admin authority
    pub admin_service: Arc<AdminService>,
    /// Note CRUD
    pub note_service: Arc<NoteService>,
    /// Share link issuer
    pub share_service: Arc<ShareService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

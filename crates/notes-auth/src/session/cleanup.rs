//! Optional periodic sweep of expired sessions.
//!
//! Validation already deletes expired sessions lazily, so the sweep only
//! keeps the table from accumulating rows nobody presents again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use notes_core::error::AppError;
use notes_core::traits::Clock;
use notes_database::repositories::SessionRepository;

/// Deletes sessions whose expiry has passed.
#[derive(Clone)]
pub struct SessionCleanup {
    /// Session persistence.
    sessions: Arc<SessionRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionCleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCleanup").finish()
    }
}

impl SessionCleanup {
    /// Creates a new session cleanup handler.
    pub fn new(sessions: Arc<SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    /// Runs one cleanup cycle, returning the number of sessions removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let removed = self.sessions.delete_expired(self.clock.now()).await?;
        if removed > 0 {
            info!(removed = removed, "Session cleanup completed");
        }
        Ok(removed)
    }

    /// Spawns a task that runs a cycle every `interval`. Failures are
    /// logged and the loop keeps going.
    pub fn spawn(self, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!(error = %e, "Session cleanup failed");
                }
            }
        })
    }
}

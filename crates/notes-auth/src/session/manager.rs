//! Session lifecycle manager.
//!
//! Sessions are opaque bearer tokens stored in the `sessions` table. Expiry
//! is absolute and fixed at issuance; an expired session is deleted the
//! first time it is presented.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use notes_core::error::AppError;
use notes_core::traits::Clock;
use notes_database::repositories::SessionRepository;
use notes_entity::session::CreateSession;

use crate::token::{SESSION_TOKEN_BYTES, generate_token};

/// Issues, validates, and revokes login sessions.
#[derive(Clone)]
pub struct SessionManager {
    /// Session persistence.
    sessions: Arc<SessionRepository>,
    /// Time source for issuance and expiry checks.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(sessions: Arc<SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    /// Issues a session for `user_id` valid for `ttl`, returning the token.
    ///
    /// A token collision fails with an internal error; nothing is
    /// overwritten.
    pub async fn create_session(&self, user_id: i64, ttl: Duration) -> Result<String, AppError> {
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Session expiry is out of range"))?;
        let token = generate_token(SESSION_TOKEN_BYTES);

        let session = self
            .sessions
            .create(&CreateSession {
                user_id,
                token: token.clone(),
                expires_at,
                created_at: now,
            })
            .await?;

        info!(
            user_id = user_id,
            session_id = session.id,
            expires_at = %session.expires_at,
            "Session created"
        );

        Ok(token)
    }

    /// Resolves a token to its owning user id.
    ///
    /// Unknown tokens and tokens past expiry both fail with an
    /// authentication error; the latter are deleted first.
    pub async fn validate_session(&self, token: &str) -> Result<i64, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::unauthorized("Authentication required"));
        }

        let session = self
            .sessions
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid or expired session"))?;

        if session.is_expired_at(self.clock.now()) {
            self.sessions.delete_by_token(token).await?;
            info!(
                user_id = session.user_id,
                session_id = session.id,
                "Expired session removed"
            );
            return Err(AppError::unauthorized("Invalid or expired session"));
        }

        Ok(session.user_id)
    }

    /// Revokes a session. Unknown tokens are ignored.
    pub async fn destroy_session(&self, token: &str) -> Result<(), AppError> {
        if token.is_empty() {
            return Ok(());
        }
        let removed = self.sessions.delete_by_token(token).await?;
        debug!(removed = removed, "Session destroyed");
        Ok(())
    }
}

//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use notes_core::error::{AppError, ErrorKind};
use notes_core::result::AppResult;
use notes_entity::session::{CreateSession, Session};

/// Repository for session persistence.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a session by its token, expired or not.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to find session", e))
    }

    /// Insert a new session.
    ///
    /// A token collision is a UNIQUE violation and fails the insert; the
    /// existing row is never overwritten.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            r#"INSERT INTO sessions (user_id, token, expires_at, created_at)
               VALUES (?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(data.user_id)
        .bind(&data.token)
        .bind(data.expires_at)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to create session", e))
    }

    /// Delete a session by token. Returns whether a row was removed.
    pub async fn delete_by_token(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session whose expiry is strictly before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to delete expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}

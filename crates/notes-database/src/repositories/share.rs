//! Share link repository implementation.

use sqlx::SqlitePool;

use notes_core::error::{AppError, ErrorKind};
use notes_core::result::AppResult;
use notes_entity::share::{CreateShareLink, ShareLink};

/// Repository for share link lookup and toggling.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: SqlitePool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the link of a note, enabled or not.
    pub async fn find_by_note(&self, note_id: i64) -> AppResult<Option<ShareLink>> {
        sqlx::query_as::<_, ShareLink>("SELECT * FROM share_links WHERE note_id = ?")
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to find share link by note", e)
            })
    }

    /// Find a link by token, enabled or not.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareLink>> {
        sqlx::query_as::<_, ShareLink>("SELECT * FROM share_links WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to find share link by token", e)
            })
    }

    /// Insert a new enabled link.
    ///
    /// Both `note_id` and `token` are UNIQUE, so a concurrent enable of the
    /// same note fails here instead of producing a second token.
    pub async fn create(&self, data: &CreateShareLink) -> AppResult<ShareLink> {
        sqlx::query_as::<_, ShareLink>(
            r#"INSERT INTO share_links (note_id, token, is_enabled, created_at)
               VALUES (?, ?, TRUE, ?)
               RETURNING *"#,
        )
        .bind(data.note_id)
        .bind(&data.token)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to create share link", e))
    }

    /// Set the enabled flag of a note's link. Returns whether a link exists.
    pub async fn set_enabled(&self, note_id: i64, enabled: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE share_links SET is_enabled = ? WHERE note_id = ?")
            .bind(enabled)
            .bind(note_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to update share link", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

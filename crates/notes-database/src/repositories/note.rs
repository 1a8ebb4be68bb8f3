//! Note repository implementation.
//!
//! Every query that reads or mutates a single note is scoped to the owning
//! user, so a foreign id behaves exactly like a missing one.

use sqlx::SqlitePool;

use notes_core::error::{AppError, ErrorKind};
use notes_core::result::AppResult;
use notes_entity::note::{CreateNote, Note, UpdateNote};

/// Repository for owner-scoped note CRUD.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a note by id regardless of owner.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to find note", e))
    }

    /// Find a note owned by `user_id`.
    pub async fn find_owned(&self, id: i64, user_id: i64) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to find note", e))
    }

    /// List a user's notes, most recently updated first.
    pub async fn find_by_owner(&self, user_id: i64) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE user_id = ? ORDER BY updated_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to list notes", e))
    }

    /// Create a new note.
    pub async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            r#"INSERT INTO notes (user_id, title, content, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.created_at)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to create note", e))
    }

    /// Replace title and content of a note owned by `user_id`.
    pub async fn update_owned(
        &self,
        id: i64,
        user_id: i64,
        data: &UpdateNote,
    ) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            r#"UPDATE notes SET title = ?, content = ?, updated_at = ?
               WHERE id = ? AND user_id = ?
               RETURNING *"#,
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.updated_at)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to update note", e))
    }

    /// Delete a note owned by `user_id`. Returns whether a row was removed.
    pub async fn delete_owned(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to delete note", e))?;
        Ok(result.rows_affected() > 0)
    }
}

//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Whether `user_id` owns this note.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a new note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    /// Owning user.
    pub user_id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Creation time, also used as the initial update time.
    pub created_at: DateTime<Utc>,
}

/// Replacement title and content for an existing note.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    /// New title.
    pub title: String,
    /// New body text.
    pub content: String,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

//! Share link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A capability granting anonymous read access to one note.
///
/// There is at most one link per note. Disabling a link keeps its token so
/// a later re-enable hands out the same URL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareLink {
    /// Unique link identifier.
    pub id: i64,
    /// The shared note.
    pub note_id: i64,
    /// Opaque, unguessable token.
    pub token: String,
    /// Whether the token currently resolves.
    pub is_enabled: bool,
    /// When the link was first created.
    pub created_at: DateTime<Utc>,
}

impl ShareLink {
    /// The public path at which the note can be read.
    pub fn public_path(&self) -> String {
        share_path(&self.token)
    }
}

/// Data required to create a new share link.
#[derive(Debug, Clone)]
pub struct CreateShareLink {
    /// The shared note.
    pub note_id: i64,
    /// Freshly minted token.
    pub token: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Public path for a share token.
pub fn share_path(token: &str) -> String {
    format!("/share/{token}")
}

//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notes_entity::note::Note;
use notes_service::NoteDetail;

/// Current identity, returned by `GET /api/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// User ID.
    pub user_id: i64,
    /// Normalized email.
    pub email: String,
    /// Admin flag.
    pub is_admin: bool,
}

/// Id of a newly created resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// New ID.
    pub id: i64,
}

/// A note as returned to its owner or to a share-link reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Public share path, present only on the owner's detail view while
    /// sharing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
            share_url: None,
        }
    }
}

impl From<NoteDetail> for NoteResponse {
    fn from(detail: NoteDetail) -> Self {
        Self {
            share_url: detail.share_url,
            ..Self::from(detail.note)
        }
    }
}

//! Note CRUD scoped to the owning user.

use std::sync::Arc;

use tracing::info;

use notes_core::error::AppError;
use notes_core::traits::Clock;
use notes_database::repositories::{NoteRepository, ShareRepository};
use notes_entity::note::{CreateNote, Note, UpdateNote};

use crate::context::RequestContext;

/// A note plus the public path of its link, when sharing is enabled.
#[derive(Debug, Clone)]
pub struct NoteDetail {
    /// The note.
    pub note: Note,
    /// `/share/{token}` if the note's link exists and is enabled.
    pub share_url: Option<String>,
}

/// Lists, reads, and mutates the requester's own notes.
///
/// Notes belonging to someone else are reported as not found.
#[derive(Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
    /// Share link repository, read for the detail view.
    share_repo: Arc<ShareRepository>,
    /// Time source for timestamps.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for NoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteService").finish()
    }
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(
        note_repo: Arc<NoteRepository>,
        share_repo: Arc<ShareRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            note_repo,
            share_repo,
            clock,
        }
    }

    /// Lists the requester's notes, most recently updated first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Note>, AppError> {
        self.note_repo.find_by_owner(ctx.user_id).await
    }

    /// Creates a note owned by the requester.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        let note = self
            .note_repo
            .create(&CreateNote {
                user_id: ctx.user_id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: self.clock.now(),
            })
            .await?;
        info!(user_id = ctx.user_id, note_id = note.id, "Note created");
        Ok(note)
    }

    /// Gets one of the requester's notes with its share path.
    pub async fn get(&self, ctx: &RequestContext, note_id: i64) -> Result<NoteDetail, AppError> {
        let note = self
            .note_repo
            .find_owned(note_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;

        let share_url = self
            .share_repo
            .find_by_note(note.id)
            .await?
            .filter(|link| link.is_enabled)
            .map(|link| link.public_path());

        Ok(NoteDetail { note, share_url })
    }

    /// Replaces title and content of one of the requester's notes.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        note_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        self.note_repo
            .update_owned(
                note_id,
                ctx.user_id,
                &UpdateNote {
                    title: title.to_string(),
                    content: content.to_string(),
                    updated_at: self.clock.now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Deletes one of the requester's notes and, by cascade, its link.
    pub async fn delete(&self, ctx: &RequestContext, note_id: i64) -> Result<(), AppError> {
        if !self.note_repo.delete_owned(note_id, ctx.user_id).await? {
            return Err(AppError::not_found("Note not found"));
        }
        info!(user_id = ctx.user_id, note_id = note_id, "Note deleted");
        Ok(())
    }
}

//! Share link issuance, toggling, and public resolution.
//!
//! A note has at most one link. The first enable mints a token; later
//! enables and disables only flip the flag, so a note's public URL never
//! changes once handed out. Uniqueness of `note_id` and `token` is left to
//! the store: a concurrent first enable loses with an internal error and
//! may simply be retried.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use notes_auth::token::{SHARE_TOKEN_BYTES, generate_token};
use notes_core::error::AppError;
use notes_core::traits::Clock;
use notes_database::repositories::{NoteRepository, ShareRepository};
use notes_entity::note::Note;
use notes_entity::share::{CreateShareLink, share_path};

use crate::context::RequestContext;

/// The token of an enabled link and the path it is served at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareGrant {
    /// Opaque share token.
    pub token: String,
    /// Public path, `/share/{token}`.
    pub share_url: String,
}

/// Issues and resolves share links.
#[derive(Clone)]
pub struct ShareService {
    /// Note repository, for ownership checks and resolution.
    note_repo: Arc<NoteRepository>,
    /// Share link repository.
    share_repo: Arc<ShareRepository>,
    /// Time source for link creation.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ShareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareService").finish()
    }
}

impl ShareService {
    /// Creates a new share service.
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

    /// Enables sharing for a note the requester owns.
    pub async fn enable_share(
        &self,
        ctx: &RequestContext,
        note_id: i64,
    ) -> Result<ShareGrant, AppError> {
        self.owned_note(ctx, note_id).await?;

        if let Some(link) = self.share_repo.find_by_note(note_id).await? {
            if !link.is_enabled {
                self.share_repo.set_enabled(note_id, true).await?;
            }
            info!(user_id = ctx.user_id, note_id = note_id, "Share link enabled");
            return Ok(ShareGrant {
                share_url: link.public_path(),
                token: link.token,
            });
        }

        let link = self
            .share_repo
            .create(&CreateShareLink {
                note_id,
                token: generate_token(SHARE_TOKEN_BYTES),
                created_at: self.clock.now(),
            })
            .await?;

        info!(
            user_id = ctx.user_id,
            note_id = note_id,
            share_id = link.id,
            "Share link created"
        );

        Ok(ShareGrant {
            share_url: share_path(&link.token),
            token: link.token,
        })
    }

    /// Disables sharing for a note the requester owns. A note without a
    /// link is left as is.
    pub async fn disable_share(&self, ctx: &RequestContext, note_id: i64) -> Result<(), AppError> {
        self.owned_note(ctx, note_id).await?;

        if self.share_repo.set_enabled(note_id, false).await? {
            info!(user_id = ctx.user_id, note_id = note_id, "Share link disabled");
        }
        Ok(())
    }

    /// Resolves a public token to its note.
    ///
    /// Unknown and disabled tokens fail identically.
    pub async fn resolve_shared(&self, token: &str) -> Result<Note, AppError> {
        let not_found = || AppError::not_found("Shared note not found");

        let link = self
            .share_repo
            .find_by_token(token)
            .await?
            .filter(|link| link.is_enabled)
            .ok_or_else(not_found)?;

        self.note_repo
            .find_by_id(link.note_id)
            .await?
            .ok_or_else(not_found)
    }

    /// The requester's note, or not-found whether it is missing or foreign.
    async fn owned_note(&self, ctx: &RequestContext, note_id: i64) -> Result<Note, AppError> {
        self.note_repo
            .find_owned(note_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }
}

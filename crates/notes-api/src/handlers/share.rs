//! Share link handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use notes_service::ShareGrant;

use crate::dto::response::NoteResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_id};
use crate::state::AppState;

/// POST /api/notes/{id}/share
pub async fn enable_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ShareGrant>, ApiError> {
    let grant = state
        .share_service
        .enable_share(auth.context(), parse_id(&id)?)
        .await?;
    Ok(Json(grant))
}

/// POST /api/notes/{id}/share/disable
pub async fn disable_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .share_service
        .disable_share(auth.context(), parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/share/{token}
///
/// Public; no session is read.
pub async fn get_shared(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = state.share_service.resolve_shared(&token).await?;
    Ok(Json(NoteResponse::from(note)))
}

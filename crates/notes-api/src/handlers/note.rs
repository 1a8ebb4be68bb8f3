//! Note CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::NoteRequest;
use crate::dto::response::{CreatedResponse, NoteResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = state.note_service.list(auth.context()).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<NoteRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let note = state
        .note_service
        .create(auth.context(), &req.title, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: note.id })))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let detail = state
        .note_service
        .get(auth.context(), parse_id(&id)?)
        .await?;
    Ok(Json(NoteResponse::from(detail)))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<NoteRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .note_service
        .update(auth.context(), parse_id(&id)?, &req.title, &req.content)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .note_service
        .delete(auth.context(), parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

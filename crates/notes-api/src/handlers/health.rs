//! Health check handler.

use axum::extract::State;

use notes_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
///
/// Answers `ok` only while the store accepts queries.
pub async fn health(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    if !state.db.health_check().await? {
        return Err(AppError::internal("Database health check returned an unexpected value").into());
    }
    Ok("ok")
}

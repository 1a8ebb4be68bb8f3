//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use notes_entity::user::UserView;

use crate::dto::request::{CreateUserRequest, SetAdminRequest};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = state.admin_service.list_users().await?;
    Ok(Json(users))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let user = state
        .admin_service
        .create_user(auth.context(), &req.email, &req.password, req.is_admin)
        .await?;
    Ok((StatusCode::CREATED, Json(user.view())))
}

/// PUT /api/admin/users/{id}/admin
pub async fn set_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<SetAdminRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .admin_service
        .set_admin_flag(auth.context(), parse_id(&id)?, req.is_admin)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Auth handlers: register, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use tracing::debug;

use notes_auth::session::{removal_cookie, session_cookie};
use notes_entity::user::UserView;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::MeResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let user = state
        .user_service
        .register(&req.email, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user.view())))
}

/// POST /api/login
///
/// On success the session token is delivered only as a cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let user = state
        .user_service
        .verify(&req.email, &req.password)
        .await?;

    let session_config = &state.config.session;
    let token = state
        .session_manager
        .create_session(user.id, session_config.ttl())
        .await?;

    Ok((
        jar.add(session_cookie(session_config, token)),
        StatusCode::NO_CONTENT,
    ))
}

/// POST /api/logout
///
/// Always clears the cookie, whether or not it named a live session.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let session_config = &state.config.session;

    if let Some(cookie) = jar.get(&session_config.cookie_name) {
        let token = cookie.value().trim();
        if !token.is_empty() {
            state.session_manager.destroy_session(token).await?;
        }
    } else {
        debug!("Logout without session cookie");
    }

    Ok((jar.add(removal_cookie(session_config)), StatusCode::NO_CONTENT))
}

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = state.user_service.get(auth.user_id).await?;

    Ok(Json(MeResponse {
        user_id: user.id,
        email: user.email,
        is_admin: user.is_admin,
    }))
}

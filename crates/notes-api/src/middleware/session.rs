//! Session stage of the request gate.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use notes_core::error::AppError;
use notes_core::traits::Clock;
use notes_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the session cookie to a user and stores the resulting
/// [`RequestContext`] in the request extensions for [`AuthUser`].
///
/// [`AuthUser`]: crate::extractors::AuthUser
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(&state.config.session.cookie_name)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    let user_id = state.session_manager.validate_session(&token).await?;

    request
        .extensions_mut()
        .insert(RequestContext::new(user_id, state.clock.now()));

    Ok(next.run(request).await)
}

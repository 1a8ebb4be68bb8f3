//! Admin stage of the request gate.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Lets the request through only if the session user is an admin.
///
/// Must run inside [`require_session`](super::session::require_session).
pub async fn require_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.admin_service.require_admin(auth.user_id).await?;
    Ok(next.run(request).await)
}

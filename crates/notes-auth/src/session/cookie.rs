//! The session cookie contract.
//!
//! The token rides in an `HttpOnly`, `SameSite=Lax` cookie scoped to `/`
//! whose `Max-Age` equals the session TTL. Logout overwrites it with an
//! empty value and `Max-Age=0`.

use axum_extra::extract::cookie::{Cookie, SameSite};

use notes_core::config::SessionConfig;

/// Builds the cookie that delivers a freshly issued session token.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(config.ttl_seconds()))
        .build()
}

/// Builds the cookie that instructs the client to drop the session.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::ZERO)
        .build()
}

//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An issued login session.
///
/// Sessions are created on login and destroyed on logout or on the first
/// access after expiry. The expiry is fixed at issuance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: i64,
    /// The user this session belongs to.
    pub user_id: i64,
    /// Opaque bearer token carried by the session cookie.
    #[serde(skip_serializing)]
    pub token: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// A session is still valid at `now` while `now <= expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    /// The user this session belongs to.
    pub user_id: i64,
    /// Opaque bearer token.
    pub token: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// Issuance time.
    pub created_at: DateTime<Utc>,
}

//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session issuance and cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Absolute session lifetime in hours. Never extended by activity.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Set the `Secure` attribute on the session cookie.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Interval for the optional expired-session sweep in minutes.
    /// `0` disables the sweep; expiry is then enforced lazily only.
    #[serde(default)]
    pub cleanup_interval_minutes: u64,
}

/// Longest accepted session lifetime, one hundred years.
pub const MAX_TTL_HOURS: u64 = 24 * 365 * 100;

impl SessionConfig {
    /// Session lifetime as a chrono duration.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.ttl_hours.min(MAX_TTL_HOURS) as i64)
    }

    /// Session lifetime in seconds, used for the cookie `Max-Age`.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl().num_seconds()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            cleanup_interval_minutes: 0,
        }
    }
}

fn default_ttl_hours() -> u64 {
    168
}

fn default_cookie_name() -> String {
    "notes_session".to_string()
}

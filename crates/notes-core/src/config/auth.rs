//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length for registration and admin provisioning.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Reject passwords scoring below 3 on the zxcvbn estimator.
    #[serde(default)]
    pub enforce_strength: bool,
    /// Mount `POST /api/register` for self-service sign-up.
    #[serde(default)]
    pub allow_registration: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            enforce_strength: false,
            allow_registration: false,
        }
    }
}

fn default_password_min() -> usize {
    6
}

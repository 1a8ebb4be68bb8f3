//! Bootstrap administrator configuration.

use serde::{Deserialize, Serialize};

/// Credentials for the administrator ensured at startup.
///
/// Both fields empty disables the bootstrap. Setting only one of them is a
/// fatal configuration error.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AdminBootstrapConfig {
    /// Administrator email.
    #[serde(default)]
    pub email: String,
    /// Administrator password (at least 8 characters).
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrapConfig")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}

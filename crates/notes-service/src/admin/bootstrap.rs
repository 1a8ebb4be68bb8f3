//! Startup provisioning of the configured administrator.

use tracing::info;

use notes_auth::password::PasswordValidator;
use notes_core::error::AppError;
use notes_entity::user::normalize_email;

use super::service::AdminService;

/// Minimum length of the bootstrap administrator password.
pub const BOOTSTRAP_PASSWORD_MIN_LENGTH: usize = 8;

/// What [`AdminService::bootstrap_admin`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Neither email nor password configured.
    Skipped,
    /// An existing user was given the admin flag. Its password is unchanged.
    Promoted(i64),
    /// A new admin user was created.
    Created(i64),
}

impl AdminService {
    /// Ensures the configured administrator exists.
    ///
    /// Both values empty is a no-op. Exactly one empty, or a password
    /// shorter than [`BOOTSTRAP_PASSWORD_MIN_LENGTH`], is a configuration
    /// error and must abort startup.
    pub async fn bootstrap_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<BootstrapOutcome, AppError> {
        let email = normalize_email(email);
        if email.is_empty() && password.is_empty() {
            return Ok(BootstrapOutcome::Skipped);
        }
        if email.is_empty() || password.is_empty() {
            return Err(AppError::configuration(
                "admin.email and admin.password must both be set",
            ));
        }
        if password.chars().count() < BOOTSTRAP_PASSWORD_MIN_LENGTH {
            return Err(AppError::configuration(format!(
                "admin.password must be at least {BOOTSTRAP_PASSWORD_MIN_LENGTH} characters"
            )));
        }

        if let Some(existing) = self.users.find_by_email(&email).await? {
            self.users.set_admin_flag(existing.id, true).await?;
            info!(user_id = existing.id, email = %email, "Bootstrap admin promoted");
            return Ok(BootstrapOutcome::Promoted(existing.id));
        }

        let policy = PasswordValidator::with_min_length(BOOTSTRAP_PASSWORD_MIN_LENGTH);
        let user = self
            .users
            .create_with_policy(&email, password, true, &policy)
            .await?;
        info!(user_id = user.id, email = %email, "Bootstrap admin created");
        Ok(BootstrapOutcome::Created(user.id))
    }
}

//! Privilege checks and admin-only user management.

use std::sync::Arc;

use tracing::{info, warn};

use notes_core::error::AppError;
use notes_entity::user::{User, UserView};

use crate::context::RequestContext;
use crate::user::UserService;

/// Gates privileged operations on the requesting user's admin flag.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Credential store the authority reads and writes through.
    pub(crate) users: Arc<UserService>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    /// Fails with a forbidden error unless `user_id` names an admin.
    ///
    /// A user that no longer exists is treated the same as a non-admin.
    pub async fn require_admin(&self, user_id: i64) -> Result<User, AppError> {
        match self.users.get(user_id).await {
            Ok(user) if user.is_admin => Ok(user),
            Ok(_) => {
                warn!(user_id = user_id, "Admin access denied");
                Err(AppError::forbidden("Admin privileges required"))
            }
            Err(e) if e.is(notes_core::error::ErrorKind::NotFound) => {
                warn!(user_id = user_id, "Admin access denied: unknown user");
                Err(AppError::forbidden("Admin privileges required"))
            }
            Err(e) => Err(e),
        }
    }

    /// Sets `target`'s admin flag on behalf of the acting admin.
    ///
    /// An admin may promote or demote anyone except themselves; removing
    /// one's own flag must be done by another admin.
    pub async fn set_admin_flag(
        &self,
        ctx: &RequestContext,
        target: i64,
        is_admin: bool,
    ) -> Result<(), AppError> {
        if ctx.user_id == target && !is_admin {
            return Err(AppError::validation("Cannot demote yourself"));
        }

        self.users.set_admin_flag(target, is_admin).await?;

        info!(
            admin_id = ctx.user_id,
            target_id = target,
            is_admin = is_admin,
            "Admin flag changed by admin"
        );
        Ok(())
    }

    /// Creates a user with an explicit initial admin flag.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, AppError> {
        let user = self.users.create(email, password, is_admin).await?;
        info!(
            admin_id = ctx.user_id,
            new_user_id = user.id,
            is_admin = user.is_admin,
            "User created by admin"
        );
        Ok(user)
    }

    /// Lists every user.
    pub async fn list_users(&self) -> Result<Vec<UserView>, AppError> {
        self.users.list_users().await
    }
}

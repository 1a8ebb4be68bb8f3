//! User registration, credential verification, and admin flag storage.

use std::sync::Arc;

use tracing::{info, warn};

use notes_auth::password::{PasswordHasher, PasswordValidator};
use notes_core::error::AppError;
use notes_core::traits::Clock;
use notes_database::repositories::UserRepository;
use notes_entity::user::{CreateUser, User, UserView, normalize_email};

/// Message shared by every credential failure so callers cannot tell an
/// unknown email from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Owns user identity records and password verification.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Registration password policy.
    validator: Arc<PasswordValidator>,
    /// Time source for creation timestamps.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("validator", &self.validator)
            .finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            clock,
        }
    }

    /// Registers a new non-admin user.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        self.create_with_policy(email, password, false, &self.validator)
            .await
    }

    /// Creates a user with an explicit admin flag under the registration
    /// password policy.
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, AppError> {
        self.create_with_policy(email, password, is_admin, &self.validator)
            .await
    }

    /// Validates, hashes and inserts a user.
    ///
    /// Every account creation path goes through here so they all share
    /// normalization and hashing.
    pub(crate) async fn create_with_policy(
        &self,
        email: &str,
        password: &str,
        is_admin: bool,
        policy: &PasswordValidator,
    ) -> Result<User, AppError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        policy.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                is_admin,
                created_at: self.clock.now(),
            })
            .await?;

        info!(
            user_id = user.id,
            email = %user.email,
            is_admin = user.is_admin,
            "User created"
        );

        Ok(user)
    }

    /// Checks an email and password pair, returning the user on success.
    pub async fn verify(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            self.hasher.verify_dummy(password);
            warn!(email = %email, "Login failed: unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        info!(user_id = user.id, "Login succeeded");
        Ok(user)
    }

    /// Sets a user's admin flag. Setting the current value again is fine.
    pub async fn set_admin_flag(&self, user_id: i64, is_admin: bool) -> Result<(), AppError> {
        if !self.user_repo.set_admin(user_id, is_admin).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = user_id, is_admin = is_admin, "Admin flag updated");
        Ok(())
    }

    /// Lists every user, ordered by id, without password hashes.
    pub async fn list_users(&self) -> Result<Vec<UserView>, AppError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.iter().map(UserView::from).collect())
    }

    /// Gets a user by id.
    pub async fn get(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Looks up a user by email, normalizing it first.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_email(&normalize_email(email)).await
    }
}

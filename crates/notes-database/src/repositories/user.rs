//! User repository implementation.

use sqlx::SqlitePool;

use notes_core::error::{AppError, ErrorKind};
use notes_core::result::AppResult;
use notes_entity::user::{CreateUser, User};

use crate::is_unique_violation;

/// Repository for user CRUD and query operations.
///
/// Emails are expected to arrive already normalized; the UNIQUE constraint
/// on `users.email` is the only duplicate check.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to find user by id", e))
    }

    /// Find a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to find user by email", e)
            })
    }

    /// List every user ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to list users", e))
    }

    /// Create a new user.
    ///
    /// A duplicate email is reported as [`ErrorKind::Conflict`].
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, password_hash, is_admin, created_at)
               VALUES (?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.is_admin)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::with_source(
                    ErrorKind::Conflict,
                    format!("Email '{}' is already registered", data.email),
                    e,
                )
            } else {
                AppError::with_source(ErrorKind::Internal, "Failed to create user", e)
            }
        })
    }

    /// Set the admin flag. Returns `false` when no such user exists.
    pub async fn set_admin(&self, id: i64, is_admin: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE id = ?")
            .bind(is_admin)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to update admin flag", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

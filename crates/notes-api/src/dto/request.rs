//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email, normalized by the service.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Self-service registration body. Password policy is enforced by the
/// service, which knows the configured minimum.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    pub password: String,
    /// Initial admin flag.
    #[serde(default)]
    pub is_admin: bool,
}

/// Admin flag toggle body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetAdminRequest {
    /// Desired flag value.
    pub is_admin: bool,
}

/// Note create or replace body. Missing fields are empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NoteRequest {
    /// Title.
    #[serde(default)]
    #[validate(length(max = 500, message = "Title is too long"))]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
}

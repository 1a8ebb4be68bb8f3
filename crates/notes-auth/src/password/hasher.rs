//! Argon2id password hashing and verification.
//!
//! Stored hashes are PHC strings, so parameters and salt travel with each
//! hash. Login with an unknown email still pays for one verification via
//! [`PasswordHasher::verify_dummy`].

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier,
        SaltString,
    },
};
use rand::rngs::OsRng;

use notes_core::error::AppError;

/// Plaintext behind the throwaway hash used by [`PasswordHasher::verify_dummy`].
const DUMMY_PASSWORD: &str = "notes-dummy-credential";

/// Hash of [`DUMMY_PASSWORD`], computed with the live parameters on first use.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Argon2id hashing with the crate's default parameters.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hashes `password` with a fresh random salt into a PHC string.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Checks `password` against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash or a primitive
    /// failure is an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Runs one full verification against a throwaway hash and discards
    /// the result. Called when no stored hash exists for a login attempt.
    pub fn verify_dummy(&self, password: &str) {
        let hash = DUMMY_HASH.get_or_init(|| self.hash_password(DUMMY_PASSWORD).unwrap_or_default());
        if let Ok(parsed) = PasswordHash::new(hash) {
            let _ = Argon2::default().verify_password(password.as_bytes(), &parsed);
        }
    }
}

//! # notes-auth
//!
//! Authentication primitives for the notes backend.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and policy enforcement
//! - `token` — Opaque, URL-safe random tokens
//! - `session` — Session issuance, validation, revocation, cookie contract
//!   and the optional expiry sweep

pub mod password;
pub mod session;
pub mod token;

pub use password::{PasswordHasher, PasswordValidator};
pub use session::{SessionCleanup, SessionManager};
pub use token::generate_token;

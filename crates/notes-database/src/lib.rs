//! # notes-database
//!
//! SQLite connection management, schema migrations, and concrete
//! repository implementations for users, sessions, notes and share links.
//!
//! Uniqueness of emails and tokens is enforced by table constraints, not
//! by in-process locks, so repositories report constraint violations to
//! their callers instead of retrying.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

/// Whether a sqlx error is a UNIQUE constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

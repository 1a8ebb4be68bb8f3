//! # notes-entity
//!
//! Domain entity models for the notes backend. Every struct in this crate
//! represents a database table row or a domain value object. Row types
//! derive `sqlx::FromRow`.

pub mod note;
pub mod session;
pub mod share;
pub mod user;

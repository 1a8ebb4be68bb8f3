//! # notes-core
//!
//! Core crate for the notes backend. Contains the configuration schema,
//! the unified error taxonomy, and the clock abstraction used by every
//! time-sensitive component.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;

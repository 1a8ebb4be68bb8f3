//! # notes-api
//!
//! HTTP API layer for the notes backend built on Axum.
//!
//! Provides the REST endpoints, the request gate middleware (CORS, session,
//! admin), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;

//! # notes-service
//!
//! Business logic service layer for the notes backend. Each service
//! orchestrates repositories and auth primitives to implement one
//! application-level concern.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod context;
pub mod note;
pub mod share;
pub mod user;

pub use admin::{AdminService, BootstrapOutcome};
pub use context::RequestContext;
pub use note::{NoteDetail, NoteService};
pub use share::{ShareGrant, ShareService};
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support;

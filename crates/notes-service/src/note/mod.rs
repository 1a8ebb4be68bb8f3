//! Owner-scoped note CRUD.

pub mod service;

pub use service::{NoteDetail, NoteService};

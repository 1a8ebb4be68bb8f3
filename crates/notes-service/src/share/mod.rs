//! Capability tokens granting anonymous read access to a single note.

pub mod service;

pub use service::{ShareGrant, ShareService};

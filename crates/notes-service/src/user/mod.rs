//! Credential store: user identity records and password verification.

pub mod service;

pub use service::UserService;

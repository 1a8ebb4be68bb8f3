//! Route handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod health;
pub mod note;
pub mod share;

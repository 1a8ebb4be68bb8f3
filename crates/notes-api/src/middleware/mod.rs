//! Axum middleware stack.
//!
//! The request gate runs in this order: `cors` on every route, `session`
//! on identity routes, `admin` on `/api/admin`. Any stage may answer the
//! request itself, in which case later stages and the handler never run.

pub mod admin;
pub mod cors;
pub mod logging;
pub mod session;

//! Session lifecycle management: issuance, validation, revocation, the
//! cookie that carries the token, and the optional expiry sweep.

pub mod cleanup;
pub mod cookie;
pub mod manager;

pub use cleanup::SessionCleanup;
pub use cookie::{removal_cookie, session_cookie};
pub use manager::SessionManager;

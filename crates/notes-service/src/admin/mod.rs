//! Admin authority: the privilege flag, startup bootstrap, and guarded
//! user management.

pub mod bootstrap;
pub mod service;

pub use bootstrap::BootstrapOutcome;
pub use service::AdminService;

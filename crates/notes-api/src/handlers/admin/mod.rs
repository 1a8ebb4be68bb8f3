//! Admin-only handlers. Every route here sits behind the admin stage.

pub mod users;

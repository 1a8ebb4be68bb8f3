//! Core trait definitions shared across the workspace.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

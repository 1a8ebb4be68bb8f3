//! HTTP-level integration tests driving the full router in memory.

mod helpers;

mod admin_test;
mod gate_test;
mod note_test;
mod share_test;

//! Repository implementations for all notes entities.

pub mod note;
pub mod session;
pub mod share;
pub mod user;

pub use note::NoteRepository;
pub use session::SessionRepository;
pub use share::ShareRepository;
pub use user::UserRepository;

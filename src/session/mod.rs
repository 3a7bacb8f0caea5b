/// Session state for one chat
///
/// Holds the transcript, the todo list and the saved song.
/// Every session is an owned value; nothing is shared between them.

pub mod models;
pub mod state;

pub use models::{Entry, EntryKind, Sender};
pub use state::{Session, Transcript};

/// skypebot library
///
/// Keyword chat bot: session state plus the command interpreter that
/// answers one line at a time.

pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod telemetry;

// Re-exports for convenience
pub use config::Config;
pub use crate::core::{Clock, FixedClock, Interpreter, SystemClock};
pub use error::{BotError, CommandError, Result};
pub use session::{Entry, EntryKind, Sender, Session};

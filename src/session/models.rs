/// Transcript entry types
///
/// Entries carry who said what; the "You: " / "Bot: " prefixes are only
/// produced when an entry is rendered.

use serde::{Deserialize, Serialize};

/// Who produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// How a bot entry is phrased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Ordinary line
    Message,
    /// Text repeated back by `say`
    Echo,
}

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub sender: Sender,
    pub kind: EntryKind,
    pub text: String,
}

impl Entry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            kind: EntryKind::Message,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            kind: EntryKind::Message,
            text: text.into(),
        }
    }

    pub fn echo(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            kind: EntryKind::Echo,
            text: text.into(),
        }
    }

    /// Prefix used when rendering this entry
    pub fn prefix(&self) -> &'static str {
        match (self.sender, self.kind) {
            (Sender::User, _) => "You: ",
            (Sender::Bot, EntryKind::Message) => "Bot: ",
            (Sender::Bot, EntryKind::Echo) => "Bot says: ",
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix(), self.text)
    }
}

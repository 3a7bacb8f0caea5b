// Per-chat state: transcript, todos and saved songs
//
// Created empty, lives as long as the value. The transcript only ever grows.

use crate::session::Entry;
use serde::Serialize;
use std::collections::HashMap;

/// User id the saved-song slot is keyed by unless configured otherwise
pub const DEFAULT_USER: &str = "defaultUser";

/// Append-only list of chat entries
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry rendered with its prefix, oldest first
    pub fn rendered(&self) -> Vec<String> {
        self.entries.iter().map(Entry::to_string).collect()
    }

    /// Rendered entries containing `needle`, ignoring case
    pub fn search(&self, needle: &str) -> Vec<String> {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .map(Entry::to_string)
            .filter(|line| line.to_lowercase().contains(&needle))
            .collect()
    }

    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

/// Everything one chat remembers
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    user_id: String,
    transcript: Transcript,
    todos: Vec<String>,
    songs: HashMap<String, String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session for the default user
    pub fn new() -> Self {
        Self::for_user(DEFAULT_USER)
    }

    /// Create an empty session whose saved song is keyed by `user_id`
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            transcript: Transcript::default(),
            todos: Vec::new(),
            songs: HashMap::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Append the user's line and the bot's reply, in that order
    pub(crate) fn record_exchange(&mut self, said: Entry, reply: Entry) {
        self.transcript.push(said);
        self.transcript.push(reply);
    }

    pub fn todos(&self) -> &[String] {
        &self.todos
    }

    pub(crate) fn add_todo(&mut self, task: impl Into<String>) {
        self.todos.push(task.into());
    }

    /// Remove the first task equal to `task`. Returns false if none matched.
    pub(crate) fn complete_todo(&mut self, task: &str) -> bool {
        match self.todos.iter().position(|t| t == task) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn saved_song(&self) -> Option<&str> {
        self.songs.get(&self.user_id).map(String::as_str)
    }

    pub(crate) fn save_song(&mut self, song: impl Into<String>) {
        self.songs.insert(self.user_id.clone(), song.into());
    }
}

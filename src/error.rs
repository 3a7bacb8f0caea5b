/// Error types for skypebot
///
/// `BotError` covers failures outside the chat loop (config, IO, output).
/// `CommandError` covers malformed chat commands; its Display text is what
/// the bot replies with, so it never reaches the caller as a failure.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for skypebot operations
#[derive(Error, Debug)]
pub enum BotError {
    /// I/O errors (stdin, config file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file is not valid TOML
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for skypebot operations
pub type Result<T> = std::result::Result<T, BotError>;

/// Convert BotError to a user-friendly error message
impl BotError {
    pub fn user_message(&self) -> String {
        match self {
            BotError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            BotError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            BotError::Toml(e) => {
                format!("Could not read the config file. Details: {}", e)
            }
            BotError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            BotError::Generic(msg) => msg.clone(),
        }
    }
}

/// A chat command that matched a rule but could not be carried out.
///
/// The message is shown to the user as the bot's reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid format. Use: calculator <a> <+|-|*|/> <b>")]
    CalculatorFormat,

    #[error("Invalid numbers. Example: calculator 5 + 7")]
    InvalidNumbers,

    #[error("Unknown operator. Use + - * /")]
    UnknownOperator,

    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Invalid date format. Use M/d like 8/9")]
    InvalidDate,

    #[error("Unknown format. Try today, 8/9, or a weekday name.")]
    UnknownDayFormat,

    #[error("Please provide a task.")]
    MissingTask,

    #[error("Task not found.")]
    TaskNotFound,

    #[error("Please provide a song name.")]
    MissingSong,

    #[error("You don't have a song saved yet. Use mynewsongis <song>")]
    NoSavedSong,

    #[error("Invalid format. Use vol <0-100>")]
    VolumeFormat,

    #[error("Invalid volume \"{0}\". Use vol <0-100>")]
    VolumeNotANumber(String),

    #[error("Please enter a number between 0 and 100")]
    VolumeOutOfRange,

    #[error("Please provide a search term. Example: twitter android")]
    MissingQuery,

    #[error("Please provide a word. Example: define hello")]
    MissingWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = BotError::Config("default_user is empty".to_string());
        assert!(err.user_message().contains("default_user"));

        let err = BotError::Generic("plain".to_string());
        assert_eq!(err.user_message(), "plain");
    }

    #[test]
    fn test_error_display() {
        let err = BotError::Config("bad level".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
    }

    #[test]
    fn test_command_error_is_reply_text() {
        assert_eq!(CommandError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(
            CommandError::VolumeNotANumber("abc".to_string()).to_string(),
            "Invalid volume \"abc\". Use vol <0-100>"
        );
    }
}

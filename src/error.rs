//! Error types for rememberit

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rememberit
#[derive(Debug, Error)]
pub enum RememberError {
    #[error("Not a rememberit directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Entry content cannot be empty")]
    EmptyContent,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous entry id '{prefix}' matches {matches} entries")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("No quick-add suggestion #{position} ({available} available)")]
    NoSuggestion { position: usize, available: usize },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Could not parse entries: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<serde_json::Error> for RememberError {
    fn from(err: serde_json::Error) -> Self {
        RememberError::Parse(err.to_string())
    }
}

impl RememberError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RememberError::NotInitialized(_) => 2,
            RememberError::EntryNotFound(_) | RememberError::AmbiguousId { .. } => 3,
            RememberError::Parse(_) | RememberError::InvalidTimestamp(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RememberError::NotInitialized(path) => {
                format!(
                    "Not a rememberit directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'rememberit init' in this directory to create a new list\n\
                    • Navigate to an existing rememberit directory\n\
                    • Set REMEMBERIT_ROOT environment variable to your list path",
                    path.display()
                )
            }
            RememberError::EmptyContent => {
                "Entry content cannot be empty\n\n\
                Example: rememberit add Buy milk"
                    .to_string()
            }
            RememberError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'rememberit list' to see entry ids\n\
                    • The first characters of an id are enough if they are unique",
                    id
                )
            }
            RememberError::AmbiguousId { prefix, matches } => {
                format!(
                    "Ambiguous entry id '{}' matches {} entries\n\n\
                    Type more characters of the id (see 'rememberit list')",
                    prefix, matches
                )
            }
            RememberError::NoSuggestion { .. } => {
                format!(
                    "{}\n\n\
                    Use 'rememberit suggest' to see numbered suggestions\n\
                    (an entry text must appear at least twice to be suggested)",
                    self
                )
            }
            RememberError::InvalidTimestamp(input) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Valid timestamps:\n\
                    • now\n\
                    • YYYY-MM-DDTHH:MM[:SS[.mmm]] (e.g., 2025-01-17T09:30)\n\
                    • YYYY-MM-DD HH:MM (e.g., 2025-01-17 09:30)\n\
                    • YYYY-MM-DD (midnight)",
                    input
                )
            }
            RememberError::Parse(msg) => {
                format!(
                    "Could not parse entries: {}\n\n\
                    Expected a JSON array such as:\n\
                    [{{\"id\":\"1\",\"content\":\"Buy milk\",\"created\":\"2025-01-17T09:30:00.000\"}}]\n\
                    Existing entries were left unchanged.",
                    msg
                )
            }
            RememberError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: rememberit config quick_add_limit 3",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RememberError
pub type Result<T> = std::result::Result<T, RememberError>;

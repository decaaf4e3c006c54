//! Error types for the Word Quest tools.

use std::path::PathBuf;

use thiserror::Error;

/// Tool error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid database: {0}")]
    InvalidDatabase(String),

    #[error("Invalid entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Output path is the input path: {}", .0.display())]
    OutputIsInput(PathBuf),

    #[error("Git error: {0}")]
    Git(String),
}

impl Error {
    /// Create a git error from a message.
    pub fn git(msg: impl Into<String>) -> Self {
        Error::Git(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

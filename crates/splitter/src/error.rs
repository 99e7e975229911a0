use std::path::PathBuf;
use thiserror::Error;

/// Result type for split operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while splitting a file
#[derive(Error, Debug)]
pub enum SplitError {
    /// Input file does not exist
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error during open/read/write, including invalid UTF-8 in the input
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SplitError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

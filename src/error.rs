//! Error types for treepick
//!
//! Uses `thiserror` for library errors. Setup failures (`InvalidTree`,
//! `Configuration`) are raised before the first key is read; once the
//! session loop runs, only terminal I/O and custom handler failures escape.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treepick operations
pub type PickResult<T> = Result<T, PickError>;

/// Main error type for treepick operations
#[derive(Error, Debug)]
pub enum PickError {
    /// The option tree could not be built (empty input, missing mapping function)
    #[error("invalid tree: {0}")]
    InvalidTree(String),

    /// The picker options are inconsistent with each other or with the tree
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Config file could not be parsed
    #[error("invalid config file {file}: {message}")]
    ConfigFile { file: PathBuf, message: String },

    /// Terminal IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-registered key handler failed
    #[error(transparent)]
    Handler(anyhow::Error),
}

impl PickError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn tree(message: impl Into<String>) -> Self {
        Self::InvalidTree(message.into())
    }
}

//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Why a design tree was rejected by the flattener
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTreeReason {
    /// A node id repeats along its own ancestor path
    #[error("node '{node_id}' appears inside itself")]
    Cycle { node_id: String },

    #[error("nesting exceeds {max_depth} levels")]
    TooDeep { max_depth: usize },
}

/// Main error type for edgelint operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Screen export could not be read as a screen list
    #[error("Invalid screen export {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// Knowledge base tables could not be loaded
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Malformed design tree in screen '{screen}': {reason}")]
    MalformedTree {
        screen: String,
        reason: MalformedTreeReason,
    },

    /// One or more files of a batch run failed
    #[error("{} of {total} batch file(s) failed: {}", .failed.len(), .failed.join(", "))]
    Batch { failed: Vec<String>, total: usize },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create an input error for a screen export file
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn malformed_tree(screen: impl Into<String>, reason: MalformedTreeReason) -> Self {
        Self::MalformedTree {
            screen: screen.into(),
            reason,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

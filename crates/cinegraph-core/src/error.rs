//! Error types for Cinegraph Core

use thiserror::Error;

/// Code for store failures
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
/// Code for malformed identifiers and rejected arguments
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
/// Code for everything else
pub const INTERNAL: &str = "INTERNAL";

/// Result type alias using Cinegraph Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the catalog engine
///
/// A lookup that matches nothing is not an error: reads return `Option` or an
/// empty `Vec` instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors from storage operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LMDB/heed database errors
    #[error("Database error: {0}")]
    Database(#[from] heed::Error),

    /// Document encoding/decoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store unreachable or write rejected
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed identifier or argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Machine-readable error code surfaced to API callers
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) | Self::Database(_) | Self::Serialization(_) | Self::Storage(_) => {
                STORAGE_ERROR
            }
            Self::InvalidArgument(_) => INVALID_ARGUMENT,
            Self::Internal(_) => INTERNAL,
        }
    }

    /// Whether the failure originated in the entity store
    pub fn is_storage(&self) -> bool {
        self.code() == STORAGE_ERROR
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking store task failed: {err}"))
    }
}

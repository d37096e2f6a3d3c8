//! Error types for the store module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for HTML store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store answered with an unexpected status
    #[error("Unexpected status {status} for {pointer}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Pointer that was requested
        pointer: String,
    },

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pointer cannot be resolved inside this store
    #[error("Invalid HTML pointer: {0}")]
    InvalidPointer(String),
}

impl From<StoreError> for CrateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => CrateError::Io(e),
            _ => CrateError::Store(err.to_string()),
        }
    }
}

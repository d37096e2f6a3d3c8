//! Error types for the llmstxt crate

use thiserror::Error;

/// Result type for llmstxt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for llmstxt operations
#[derive(Debug, Error)]
pub enum Error {
    /// The start URL was not supplied
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The start URL could not be parsed
    #[error("Invalid start URL '{url}': {source}")]
    InvalidStartUrl {
        /// The URL as given by the caller
        url: String,
        /// Underlying parse failure
        source: url::ParseError,
    },

    /// The record stream produced no usable records
    #[error("No usable records in the crawl dataset ({skipped} skipped)")]
    EmptyResult {
        /// Number of records that were skipped
        skipped: usize,
    },

    /// HTML store error
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for spindle-metrics.

use thiserror::Error;

/// Result type for spindle-metrics operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for spindle-metrics operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided (shape mismatches, malformed batches).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

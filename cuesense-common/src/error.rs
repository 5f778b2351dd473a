//! Common error types for cuesense

use thiserror::Error;

/// Common result type for cuesense operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the engine and its embedding services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input (malformed feature vector, empty sample buffer)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),
}

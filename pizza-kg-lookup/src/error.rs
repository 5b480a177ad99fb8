//! Lookup error types

use thiserror::Error;

/// Errors from an external entity search
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("{backend} returned HTTP {status}")]
    Status { backend: &'static str, status: u16 },

    /// Response body did not have the expected shape
    #[error("Failed to decode {backend} response: {message}")]
    Decode {
        backend: &'static str,
        message: String,
    },

    /// Backend needs configuration that was not supplied
    #[error("Lookup configuration error: {0}")]
    Config(String),
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

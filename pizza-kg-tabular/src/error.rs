//! Error types for tabular operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading and accessing tabular data.
#[derive(Debug, Error)]
pub enum TabularError {
    /// The source file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text (wrong field count, bad quoting, invalid UTF-8).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Schema or structural error (row count mismatch, etc.)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Required header columns are absent.
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, TabularError>;

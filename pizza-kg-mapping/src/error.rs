//! Mapping error types

use pizza_kg_tabular::TabularError;
use thiserror::Error;

/// Errors raised while planning or applying mapping rules
#[derive(Debug, Error)]
pub enum MappingError {
    /// A rule referenced an entity that no type rule has minted
    #[error("Unresolved entity '{name}' in column '{column}': run a type rule for it first")]
    UnresolvedEntity { name: String, column: String },

    /// A rule names a column the table does not have
    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    /// Rules are inconsistent with each other
    #[error("Invalid mapping plan: {0}")]
    InvalidPlan(String),

    #[error(transparent)]
    Tabular(#[from] TabularError),
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

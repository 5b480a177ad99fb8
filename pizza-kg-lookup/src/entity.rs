//! Candidate entities and the search contract

use crate::error::LookupResult;
use serde::{Deserialize, Serialize};

/// A candidate entity returned by an external knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KgEntity {
    /// Expanded IRI of the entity
    pub ident: String,
    /// Human-readable label
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl KgEntity {
    pub fn new(ident: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            label: label.into(),
            description: None,
            types: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Search an external knowledge graph by name.
///
/// Implementations return at most `limit` candidates. Order is not
/// significant to callers beyond tie-breaking, and an empty vector is a
/// normal answer (no match), not an error.
pub trait EntitySearch {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>>;
}

impl<T: EntitySearch + ?Sized> EntitySearch for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>> {
        (**self).search(query, limit)
    }
}

impl<T: EntitySearch + ?Sized> EntitySearch for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>> {
        (**self).search(query, limit)
    }
}

//! URI registry: one identifier per normalized entity name

use std::collections::HashMap;

use tracing::debug;

use crate::error::{MappingError, MappingResult};
use crate::minter::UriMinter;

/// Registry key for an entity name (case-folded, otherwise verbatim)
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Maps normalized entity names to the identifier minted for them.
///
/// Owned by a single mapping run and passed to every rule. Entries are never
/// replaced or removed, so a name resolves to the same identifier for the
/// lifetime of the registry no matter which rule or row asked first.
#[derive(Debug, Clone, Default)]
pub struct UriRegistry {
    entries: HashMap<String, String>,
}

impl UriRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached identifier for `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&normalize_name(name)).map(String::as_str)
    }

    /// Return the cached identifier for `name`, minting it on first use.
    ///
    /// The minter receives the normalized name.
    pub fn resolve_or_mint(&mut self, name: &str, minter: &dyn UriMinter) -> &str {
        self.entries
            .entry(normalize_name(name))
            .or_insert_with_key(|key| {
                let iri = minter.mint(key);
                debug!(name = %key, iri = %iri, "minted entity identifier");
                iri
            })
            .as_str()
    }

    /// Identifier of an entity that must already have been minted.
    ///
    /// `column` only feeds the error message.
    pub fn lookup(&self, name: &str, column: &str) -> MappingResult<&str> {
        self.get(name).ok_or_else(|| MappingError::UnresolvedEntity {
            name: name.to_string(),
            column: column.to_string(),
        })
    }

    /// Iterate `(normalized name, identifier)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

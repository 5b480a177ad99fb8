//! Statement collection - the graph produced by one mapping run
//!
//! The `Graph` type uses `Vec<Triple>` and is append-only while the mapping
//! rules run. Call `canonicalize()` to freeze it into sorted set semantics
//! before formatting.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: rules append in row order; repeated rows may produce
///   identical statements.
/// - **Explicit deduplication**: `canonicalize()` sorts and dedupes so the
///   serialized graph has set semantics.
/// - **Prefixes**: prefix mappings travel with the graph so formatters can
///   compact IRIs (deterministic order via BTreeMap).
///
/// # Example
///
/// ```
/// use pizza_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// graph.add_prefix("ex", "http://example.org/");
/// graph.add_triple(
///     Term::iri("http://example.org/paris"),
///     Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
///     Term::iri("http://example.org/City"),
/// );
/// graph.canonicalize();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    /// Prefix mappings used when serializing
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Check whether a statement is present (linear scan)
    pub fn contains(&self, s: &Term, p: &Term, o: &Term) -> bool {
        self.triples
            .iter()
            .any(|t| &t.s == s && &t.p == p && &t.o == o)
    }

    /// Sort and remove duplicate triples (set semantics)
    pub fn canonicalize(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Check whether the triples are strictly SPO-ordered (sorted, no duplicates)
    ///
    /// Always true right after `canonicalize()`.
    pub fn is_canonical(&self) -> bool {
        self.triples.windows(2).all(|w| w[0] < w[1])
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Group triples by subject
    ///
    /// The graph should be canonicalized first for consistent grouping.
    pub fn group_by_subject(&self) -> SubjectGroups<'_> {
        SubjectGroups {
            triples: &self.triples,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// Iterator over triples grouped by subject
///
/// Assumes the graph is canonical.
pub struct SubjectGroups<'a> {
    triples: &'a [Triple],
    index: usize,
}

impl<'a> Iterator for SubjectGroups<'a> {
    type Item = (&'a Term, &'a [Triple]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.triples.len() {
            return None;
        }

        let start = self.index;
        let subject = &self.triples[start].s;

        while self.index < self.triples.len() && self.triples[self.index].s == *subject {
            self.index += 1;
        }

        Some((subject, &self.triples[start..self.index]))
    }
}

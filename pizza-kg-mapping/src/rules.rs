//! Mapping rule bodies
//!
//! Each rule walks the rows of a [`ColumnBatch`] and appends statements to a
//! [`Graph`]. Only type rules mint identifiers; every other rule looks its
//! entities up in the [`UriRegistry`] and fails with
//! [`MappingError::UnresolvedEntity`] when a type rule has not run first.
//!
//! Missing cells never produce statements. A row is skipped when its subject
//! cell is missing, and literal and object rules also skip rows whose object
//! cell is missing. The capital rule never skips on a missing discriminator.

use pizza_graph_ir::{Datatype, Graph, Term};
use pizza_kg_tabular::{Column, ColumnBatch};
use pizza_kg_vocab::{rdf, restaurants};

use crate::error::{MappingError, MappingResult};
use crate::minter::UriMinter;
use crate::registry::UriRegistry;

/// Statements emitted and rows skipped by one rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleStats {
    pub emitted: usize,
    pub skipped: usize,
}

/// A cell counts as missing when null or empty
fn present(cell: Option<&str>) -> Option<&str> {
    cell.filter(|v| !v.is_empty())
}

fn column<'a>(batch: &'a ColumnBatch, name: &str) -> MappingResult<&'a Column> {
    batch
        .column_by_name(name)
        .ok_or_else(|| MappingError::ColumnNotFound {
            column: name.to_string(),
        })
}

/// `(entity, rdf:type, class)` for every subject cell, minting on first sight
pub fn map_types(
    batch: &ColumnBatch,
    subject_column: &str,
    class: &Term,
    registry: &mut UriRegistry,
    minter: &dyn UriMinter,
    graph: &mut Graph,
) -> MappingResult<RuleStats> {
    let subjects = column(batch, subject_column)?;
    let rdf_type = Term::iri(rdf::TYPE);
    let mut stats = RuleStats::default();

    for subject in subjects.iter() {
        let Some(subject) = present(subject) else {
            stats.skipped += 1;
            continue;
        };
        let iri = registry.resolve_or_mint(subject, minter);
        graph.add_triple(Term::iri(iri), rdf_type.clone(), class.clone());
        stats.emitted += 1;
    }
    Ok(stats)
}

/// `(entity, predicate, "value"^^datatype)` with the cell taken verbatim
pub fn map_literal(
    batch: &ColumnBatch,
    subject_column: &str,
    object_column: &str,
    predicate: &Term,
    datatype: &Datatype,
    registry: &UriRegistry,
    graph: &mut Graph,
) -> MappingResult<RuleStats> {
    let subjects = column(batch, subject_column)?;
    let objects = column(batch, object_column)?;
    let mut stats = RuleStats::default();

    for (subject, value) in subjects.iter().zip(objects.iter()) {
        let (Some(subject), Some(value)) = (present(subject), present(value)) else {
            stats.skipped += 1;
            continue;
        };
        let iri = registry.lookup(subject, subject_column)?;
        graph.add_triple(
            Term::iri(iri),
            predicate.clone(),
            Term::typed(value, datatype.clone()),
        );
        stats.emitted += 1;
    }
    Ok(stats)
}

/// `(subject entity, predicate, object entity)`
pub fn map_object(
    batch: &ColumnBatch,
    subject_column: &str,
    object_column: &str,
    predicate: &Term,
    registry: &UriRegistry,
    graph: &mut Graph,
) -> MappingResult<RuleStats> {
    let subjects = column(batch, subject_column)?;
    let objects = column(batch, object_column)?;
    let mut stats = RuleStats::default();

    for (subject, object) in subjects.iter().zip(objects.iter()) {
        let (Some(subject), Some(object)) = (present(subject), present(object)) else {
            stats.skipped += 1;
            continue;
        };
        let s = registry.lookup(subject, subject_column)?;
        let o = registry.lookup(object, object_column)?;
        graph.add_triple(Term::iri(s), predicate.clone(), Term::iri(o));
        stats.emitted += 1;
    }
    Ok(stats)
}

/// Predicates chosen by the capital discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapitalPredicates {
    /// `"admin"`
    pub admin: Term,
    /// `"primary"`
    pub primary: Term,
    /// `"minor"`
    pub minor: Term,
    /// Anything else, including a missing cell
    pub default: Term,
}

impl CapitalPredicates {
    /// The restaurants ontology properties in `namespace`
    pub fn in_namespace(namespace: &str) -> Self {
        let p = |local: &str| Term::iri(format!("{namespace}{local}"));
        Self {
            admin: p(restaurants::IS_FIRST_LEVEL_ADMIN_CAPITAL_OF),
            primary: p(restaurants::IS_CAPITAL_OF),
            minor: p(restaurants::IS_SECOND_LEVEL_ADMIN_CAPITAL_OF),
            default: p(restaurants::CITY_IS_LOCATED_IN),
        }
    }

    /// Exact, case-sensitive match on the discriminator
    pub fn select(&self, value: Option<&str>) -> &Term {
        match value {
            Some("admin") => &self.admin,
            Some("primary") => &self.primary,
            Some("minor") => &self.minor,
            _ => &self.default,
        }
    }
}

/// `(city, capital predicate, country)` with the predicate picked per row
pub fn map_capital(
    batch: &ColumnBatch,
    subject_column: &str,
    object_column: &str,
    value_column: &str,
    predicates: &CapitalPredicates,
    registry: &UriRegistry,
    graph: &mut Graph,
) -> MappingResult<RuleStats> {
    let subjects = column(batch, subject_column)?;
    let objects = column(batch, object_column)?;
    let values = column(batch, value_column)?;
    let mut stats = RuleStats::default();

    for ((subject, object), value) in subjects.iter().zip(objects.iter()).zip(values.iter()) {
        let (Some(subject), Some(object)) = (present(subject), present(object)) else {
            stats.skipped += 1;
            continue;
        };
        let s = registry.lookup(subject, subject_column)?;
        let o = registry.lookup(object, object_column)?;
        graph.add_triple(Term::iri(s), predicates.select(value).clone(), Term::iri(o));
        stats.emitted += 1;
    }
    Ok(stats)
}

//! Row-to-triple mapping for the pizza-restaurant knowledge graph
//!
//! This crate turns a [`ColumnBatch`](pizza_kg_tabular::ColumnBatch) into a
//! [`Graph`](pizza_graph_ir::Graph) using four rule kinds:
//!
//! - **type**: `(entity, rdf:type, Class)`, the only rule that mints identifiers
//! - **literal**: `(entity, predicate, "cell"^^datatype)`
//! - **object**: `(entity, predicate, entity)`
//! - **capital**: `(city, predicate, country)` where the predicate depends on a
//!   discriminator column
//!
//! Identifiers come from a [`UriRegistry`] keyed by the case-folded entity
//! name, so every distinct name gets exactly one identifier per run. New
//! identifiers are produced by a [`UriMinter`]: [`LocalMinter`] builds them
//! in the ontology namespace, [`ExternalMinter`] reuses the closest match
//! from an external knowledge graph.
//!
//! # Example
//!
//! ```
//! use pizza_kg_mapping::{LocalMinter, Mapper, MappingPlan, MappingRule};
//! use pizza_kg_tabular::ColumnBatch;
//!
//! let batch = ColumnBatch::from_rows(
//!     &["city", "country"],
//!     &[vec![Some("London"), Some("United Kingdom")]],
//! )
//! .unwrap();
//!
//! let ns = "http://example.org/r#";
//! let plan = MappingPlan::new(
//!     ns,
//!     vec![
//!         MappingRule::type_of("city", "City"),
//!         MappingRule::type_of("country", "Country"),
//!         MappingRule::object("city", "country", "cityIsLocatedIn"),
//!     ],
//! );
//!
//! let mut mapper = Mapper::new(LocalMinter::new(ns));
//! let report = mapper.run(&plan, &batch).unwrap();
//! assert_eq!(report.entities, 2);
//! assert_eq!(mapper.graph().len(), 3);
//! ```

mod error;
mod mapper;
mod minter;
mod plan;
mod registry;
pub mod rules;

pub use error::{MappingError, MappingResult};
pub use mapper::{Mapper, MappingReport, RuleReport};
pub use minter::{best_candidate, process_lexical_name, ExternalMinter, LocalMinter, UriMinter};
pub use plan::{MappingPlan, MappingRule};
pub use registry::{normalize_name, UriRegistry};
pub use rules::{CapitalPredicates, RuleStats};

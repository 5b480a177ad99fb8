//! Format-agnostic RDF statement collection
//!
//! This crate provides the canonical types for the statements produced by the
//! mapping rules, independent of the serialization format written at the end
//! of a run (Turtle, N-Triples).
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Compaction
//!    to prefixed names is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype. Plain strings
//!    use `xsd:string`.
//!
//! 3. **Bag semantics while mapping** - `Graph` is append-only and keeps
//!    duplicates. Call `canonicalize()` before output for set semantics.
//!
//! # Example
//!
//! ```
//! use pizza_graph_ir::{Datatype, Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("http://example.org/london"),
//!     Term::iri("http://example.org/name"),
//!     Term::typed("London", Datatype::xsd_string()),
//! );
//! graph.canonicalize();
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::{Graph, SubjectGroups};
pub use term::Term;
pub use triple::Triple;

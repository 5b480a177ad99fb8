//! RDF graph formatters
//!
//! This crate provides formatters that convert a `pizza_graph_ir::Graph` to
//! textual interchange formats:
//!
//! - **Turtle**: prefixed, subject-grouped, human-readable
//! - **N-Triples**: one fully expanded statement per line
//!
//! Both formatters work on a canonical view of the graph (SPO sort plus
//! dedupe), so the output has set semantics and is byte-for-byte stable for
//! the same input. A graph that is already canonical is not copied.
//!
//! Prefixed names are only emitted when both the prefix label and the local
//! part match the Turtle grammar; see [`is_valid_prefix`] and
//! [`is_plain_local_name`].
//!
//! # Example
//!
//! ```
//! use pizza_graph_ir::{Graph, Term};
//! use pizza_graph_format::{format_graph, GraphFormat};
//!
//! let mut graph = Graph::new();
//! graph.add_prefix("ex", "http://example.org/");
//! graph.add_triple(
//!     Term::iri("http://example.org/london"),
//!     Term::iri("http://example.org/name"),
//!     Term::string("London"),
//! );
//!
//! let ttl = format_graph(&graph, GraphFormat::Turtle);
//! assert!(ttl.contains("ex:london ex:name \"London\" ."));
//! ```

mod escape;
mod names;
mod ntriples;
mod turtle;

pub use escape::{escape_iri, escape_literal};
pub use names::{is_plain_local_name, is_valid_prefix};
pub use ntriples::format_ntriples;
pub use turtle::format_turtle;

use pizza_graph_ir::Graph;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::{self, Write};

/// Borrow `graph` when it is already canonical, otherwise canonicalize a copy
fn canonical(graph: &Graph) -> Cow<'_, Graph> {
    if graph.is_canonical() {
        Cow::Borrowed(graph)
    } else {
        let mut owned = graph.clone();
        owned.canonicalize();
        Cow::Owned(owned)
    }
}

/// Output serialization format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    #[default]
    Turtle,
    NTriples,
}

impl GraphFormat {
    /// Conventional file extension (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            GraphFormat::Turtle => "ttl",
            GraphFormat::NTriples => "nt",
        }
    }
}

impl std::str::FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(GraphFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(GraphFormat::NTriples),
            other => Err(format!("unknown graph format '{other}'")),
        }
    }
}

/// Format a graph as a string in the requested format
pub fn format_graph(graph: &Graph, format: GraphFormat) -> String {
    match format {
        GraphFormat::Turtle => format_turtle(graph),
        GraphFormat::NTriples => format_ntriples(graph),
    }
}

/// Format a graph and write it to `writer`
pub fn write_graph<W: Write>(graph: &Graph, format: GraphFormat, mut writer: W) -> io::Result<()> {
    writer.write_all(format_graph(graph, format).as_bytes())?;
    writer.flush()
}

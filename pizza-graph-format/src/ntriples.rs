//! N-Triples graph formatter

use crate::canonical;
use crate::escape::{escape_iri, escape_literal};
use pizza_graph_ir::{Graph, Term};

fn format_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{}>", escape_iri(iri)),
        Term::Literal { value, datatype } => {
            let quoted = format!("\"{}\"", escape_literal(value));
            if datatype.is_xsd_string() {
                quoted
            } else {
                format!("{quoted}^^<{}>", escape_iri(datatype.as_iri()))
            }
        }
    }
}

/// Format a graph as N-Triples (sorted, deduplicated, one statement per line).
///
/// The graph does not need to be canonicalized first.
pub fn format_ntriples(graph: &Graph) -> String {
    let graph = canonical(graph);

    let mut out = String::new();
    for t in graph.iter() {
        out.push_str(&format!(
            "{} {} {} .\n",
            format_term(&t.s),
            format_term(&t.p),
            format_term(&t.o)
        ));
    }
    out
}

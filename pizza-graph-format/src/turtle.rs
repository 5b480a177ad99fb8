//! Turtle graph formatter
//!
//! Formats a `Graph` as Turtle: `@prefix` header, then one block per subject
//! with `rdf:type` written as `a` and listed first.

use crate::canonical;
use crate::escape::{escape_iri, escape_literal};
use crate::names::{is_plain_local_name, is_valid_prefix};
use pizza_graph_ir::{Graph, Term, Triple};
use pizza_kg_vocab::rdf;
use std::collections::BTreeMap;

/// Compacts expanded IRIs to prefixed names when the local part is a legal
/// Turtle `PN_LOCAL` without escapes.
struct Compactor<'a> {
    /// (prefix, namespace), longest namespace first
    prefixes: Vec<(&'a str, &'a str)>,
}

impl<'a> Compactor<'a> {
    fn new(prefixes: &'a BTreeMap<String, String>) -> Self {
        let mut prefixes: Vec<(&str, &str)> = declared_prefixes(prefixes).collect();
        prefixes.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(b.0)));
        Self { prefixes }
    }

    fn iri(&self, iri: &str) -> String {
        for (prefix, ns) in &self.prefixes {
            if let Some(local) = iri.strip_prefix(ns) {
                if is_plain_local_name(local) {
                    return format!("{prefix}:{local}");
                }
            }
        }
        format!("<{}>", escape_iri(iri))
    }

    fn term(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.iri(iri),
            Term::Literal { value, datatype } => {
                let quoted = format!("\"{}\"", escape_literal(value));
                if datatype.is_xsd_string() {
                    quoted
                } else {
                    format!("{quoted}^^{}", self.iri(datatype.as_iri()))
                }
            }
        }
    }
}

/// Prefix mappings that can be written as `@prefix` lines.
///
/// Labels outside `PN_PREFIX` are dropped; IRIs in their namespace are
/// written in full instead.
fn declared_prefixes(
    prefixes: &BTreeMap<String, String>,
) -> impl Iterator<Item = (&str, &str)> + '_ {
    prefixes
        .iter()
        .filter(|(p, _)| is_valid_prefix(p))
        .map(|(p, ns)| (p.as_str(), ns.as_str()))
}

fn is_type_triple(t: &Triple) -> bool {
    t.p.as_iri() == Some(rdf::TYPE)
}

/// Format a graph as Turtle.
///
/// Uses the graph's prefix map for the header and for IRI compaction. The
/// graph does not need to be canonicalized first; an already canonical
/// graph is formatted without copying.
pub fn format_turtle(graph: &Graph) -> String {
    let graph = canonical(graph);

    let compactor = Compactor::new(&graph.prefixes);
    let mut out = String::new();

    for (prefix, ns) in declared_prefixes(&graph.prefixes) {
        out.push_str(&format!("@prefix {prefix}: <{}> .\n", escape_iri(ns)));
    }

    for (subject, triples) in graph.group_by_subject() {
        if !out.is_empty() {
            out.push('\n');
        }

        let ordered: Vec<&Triple> = triples
            .iter()
            .filter(|t| is_type_triple(t))
            .chain(triples.iter().filter(|t| !is_type_triple(t)))
            .collect();

        let mut lines: Vec<String> = Vec::new();
        let mut i = 0;
        while i < ordered.len() {
            let predicate = &ordered[i].p;
            let mut objects = Vec::new();
            while i < ordered.len() && ordered[i].p == *predicate {
                objects.push(compactor.term(&ordered[i].o));
                i += 1;
            }
            let verb = if predicate.as_iri() == Some(rdf::TYPE) {
                "a".to_string()
            } else {
                compactor.term(predicate)
            };
            lines.push(format!("{verb} {}", objects.join(", ")));
        }

        out.push_str(&compactor.term(subject));
        out.push(' ');
        out.push_str(&lines.join(" ;\n    "));
        out.push_str(" .\n");
    }

    out
}

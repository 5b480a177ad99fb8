//! Formatter output must be accepted by an independent Turtle / N-Triples parser

use std::collections::BTreeSet;

use oxttl::{NTriplesParser, TurtleParser};
use pizza_graph_format::{format_ntriples, format_turtle};
use pizza_graph_ir::{Datatype, Graph, Term};

const NS: &str = "http://www.semanticweb.org/city/in3067-inm713/2024/restaurants#";
const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

fn r(local: &str) -> Term {
    Term::iri(format!("{NS}{local}"))
}

/// Local names as the minter produces them for awkward restaurant data
const AWKWARD_LOCALS: &[&str] = &[
    "pizza_½_off",
    "caf²",
    "señorª",
    "x·y",
    "joe's_pizza",
    "pizza_%231",
    "50%25_off",
    "7th_avenue_slice",
    "2×2_pizza",
    "são_paulo",
    "st._louis",
    "new_york_ny.",
    "mario-s",
    "北京",
];

fn awkward_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_prefix("restaurants", NS);
    graph.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");

    for local in AWKWARD_LOCALS {
        graph.add_triple(r(local), Term::iri(RDF_TYPE), r("Restaurant"));
        graph.add_triple(r(local), r("name"), Term::string(*local));
        graph.add_triple(r(local), r("servesMenuItem"), r("margherita"));
    }
    graph.add_triple(
        r("margherita"),
        r("description"),
        Term::string("Tomato \"San Marzano\"\nbasil\\oil\ttab"),
    );
    graph.add_triple(
        r("margherita"),
        r("amount"),
        Term::typed("12.50", Datatype::xsd_decimal()),
    );
    // Duplicate statement collapses in the output
    graph.add_triple(r("margherita"), Term::iri(RDF_TYPE), r("MenuItem"));
    graph.add_triple(r("margherita"), Term::iri(RDF_TYPE), r("MenuItem"));
    graph
}

fn parse_turtle(text: &str) -> BTreeSet<String> {
    TurtleParser::new()
        .for_reader(text.as_bytes())
        .map(|t| match t {
            Ok(t) => t.to_string(),
            Err(e) => panic!("invalid Turtle: {e}\n{text}"),
        })
        .collect()
}

fn parse_ntriples(text: &str) -> BTreeSet<String> {
    NTriplesParser::new()
        .for_reader(text.as_bytes())
        .map(|t| match t {
            Ok(t) => t.to_string(),
            Err(e) => panic!("invalid N-Triples: {e}\n{text}"),
        })
        .collect()
}

#[test]
fn turtle_and_ntriples_parse_to_the_same_statements() {
    let graph = awkward_graph();
    let mut canonical = graph.clone();
    canonical.canonicalize();

    let from_turtle = parse_turtle(&format_turtle(&graph));
    let from_ntriples = parse_ntriples(&format_ntriples(&graph));

    assert_eq!(from_turtle.len(), canonical.len());
    assert_eq!(from_turtle, from_ntriples);
}

#[test]
fn awkward_subjects_survive_turtle() {
    let parsed = parse_turtle(&format_turtle(&awkward_graph()));
    for local in AWKWARD_LOCALS {
        let expected = format!("<{NS}{local}> <{RDF_TYPE}> <{NS}Restaurant>");
        assert!(
            parsed.iter().any(|t| t.starts_with(&expected)),
            "missing type statement for {local}"
        );
    }
}

#[test]
fn literal_escapes_survive_turtle() {
    let parsed = parse_turtle(&format_turtle(&awkward_graph()));
    let from_ntriples = parse_ntriples(&format_ntriples(&awkward_graph()));
    let description = format!("<{NS}margherita> <{NS}description> ");
    assert_eq!(
        parsed.iter().filter(|t| t.starts_with(&description)).count(),
        1
    );
    assert!(from_ntriples.iter().any(|t| t.starts_with(&description)));
}

#[test]
fn invalid_prefix_label_still_parses() {
    let mut graph = awkward_graph();
    graph.add_prefix("restaurants#", NS);
    let ttl = format_turtle(&graph);
    assert!(!ttl.contains("@prefix restaurants#:"));
    assert_eq!(parse_turtle(&ttl), parse_ntriples(&format_ntriples(&graph)));
}

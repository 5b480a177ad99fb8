//! End-to-end mapping runs over small in-memory and CSV tables

use std::cell::Cell;
use std::collections::BTreeSet;

use pizza_graph_format::{format_graph, GraphFormat};
use pizza_graph_ir::{Datatype, Graph, Term};
use pizza_kg_lookup::{EntitySearch, KgEntity, LookupError, LookupResult};
use pizza_kg_mapping::{
    ExternalMinter, LocalMinter, Mapper, MappingError, MappingPlan, MappingRule, UriMinter,
};
use pizza_kg_tabular::{read_csv, ColumnBatch, CsvOptions};
use pizza_kg_vocab::{namespaces::RESTAURANTS as NS, rdf};

fn iri(local: &str) -> Term {
    Term::iri(format!("{NS}{local}"))
}

fn rdf_type() -> Term {
    Term::iri(rdf::TYPE)
}

fn capital_plan() -> MappingPlan {
    MappingPlan::new(
        NS,
        vec![
            MappingRule::type_of("city", "City"),
            MappingRule::type_of("country", "Country"),
            MappingRule::capital("city", "country", "capital"),
        ],
    )
}

fn capital_table() -> ColumnBatch {
    read_csv(
        "city,country,capital\n\
         London,United Kingdom,primary\n\
         Paris,France,\n\
         London,United Kingdom,primary\n"
            .as_bytes(),
        &CsvOptions::default(),
    )
    .unwrap()
}

fn map<M: UriMinter>(minter: M, plan: &MappingPlan, batch: &ColumnBatch) -> Graph {
    let mut mapper = Mapper::new(minter);
    mapper.run(plan, batch).unwrap();
    let mut graph = mapper.into_graph();
    graph.canonicalize();
    graph
}

#[test]
fn capital_scenario_in_fresh_mode() {
    let graph = map(LocalMinter::new(NS), &capital_plan(), &capital_table());

    let london = iri("london");
    let uk = iri("united_kingdom");
    let paris = iri("paris");
    let france = iri("france");

    assert!(graph.contains(&london, &rdf_type(), &iri("City")));
    assert!(graph.contains(&paris, &rdf_type(), &iri("City")));
    assert!(graph.contains(&uk, &rdf_type(), &iri("Country")));
    assert!(graph.contains(&france, &rdf_type(), &iri("Country")));
    assert!(graph.contains(&london, &iri("isCapitalOf"), &uk));
    assert!(graph.contains(&paris, &iri("cityIsLocatedIn"), &france));

    // Exactly those six statements once the repeated row is deduplicated
    assert_eq!(graph.len(), 6);
}

#[test]
fn literal_and_object_rules_skip_missing_cells() {
    let batch = read_csv(
        "name,city,postcode\n\
         Pizza Express,London,SW1A 1AA\n\
         Slice,London,NaN\n\
         Crust,,\n"
            .as_bytes(),
        &CsvOptions::default(),
    )
    .unwrap();
    let plan = MappingPlan::new(
        NS,
        vec![
            MappingRule::type_of("name", "Restaurant"),
            MappingRule::type_of("city", "City"),
            MappingRule::literal("name", "postcode", "postcode", "xsd:string"),
            MappingRule::object("name", "city", "locatedInCity"),
        ],
    );

    let mut mapper = Mapper::new(LocalMinter::new(NS));
    let report = mapper.run(&plan, &batch).unwrap();

    let postcode = &report.rules[2];
    assert_eq!((postcode.emitted, postcode.skipped), (1, 2));
    let located = &report.rules[3];
    assert_eq!((located.emitted, located.skipped), (2, 1));

    let graph = mapper.graph();
    assert!(graph.contains(
        &iri("pizza_express"),
        &iri("postcode"),
        &Term::typed("SW1A 1AA", Datatype::xsd_string())
    ));
    assert!(!graph
        .iter()
        .any(|t| t.s == iri("crust") && t.p == iri("locatedInCity")));
}

#[test]
fn builtin_plan_over_pizza_rows() {
    let csv = "name,address,city,country,postcode,state,categories,menu item,item value,currency,item description\n\
        Pizza Palace,1 Main St,New York,US,10001,NY,Pizza Place,Margherita,12.50,USD,\"Tomato, mozzarella \\\"fresh\\\" basil\"\n\
        Pizza Palace,1 Main St,New York,US,10001,NY,Pizza Place,Pepperoni,14.00,USD,\n\
        Joe's (Downtown),9 Elm St,Austin,US,73301,TX,Restaurants,Margherita,11,USD,Classic\n";
    let batch = read_csv(csv.as_bytes(), &CsvOptions::default()).unwrap();
    let graph = map(LocalMinter::new(NS), &MappingPlan::pizza_restaurants(), &batch);

    let palace = iri("pizza_palace");
    let joes = iri("joe's_downtown");
    assert!(graph.contains(&palace, &rdf_type(), &iri("Restaurant")));
    assert!(graph.contains(&joes, &rdf_type(), &iri("Restaurant")));
    assert!(graph.contains(&palace, &iri("locatedInCity"), &iri("new_york")));
    assert!(graph.contains(&iri("new_york"), &iri("locatedInState"), &iri("ny")));
    assert!(graph.contains(&iri("ny"), &iri("locatedInCountry"), &iri("us")));
    assert!(graph.contains(&iri("austin"), &iri("cityIsLocatedIn"), &iri("us")));
    assert!(graph.contains(&palace, &iri("servesMenuItem"), &iri("pepperoni")));
    assert!(graph.contains(&joes, &iri("servesMenuItem"), &iri("margherita")));
    assert!(graph.contains(
        &iri("pepperoni"),
        &iri("amount"),
        &Term::typed("14.00", Datatype::xsd_decimal())
    ));
    assert!(graph.contains(
        &iri("margherita"),
        &iri("description"),
        &Term::string("Tomato, mozzarella \"fresh\" basil")
    ));
    // Names keep their original case
    assert!(graph.contains(&joes, &iri("name"), &Term::string("Joe's (Downtown)")));
    // No description for the second row
    assert!(!graph
        .iter()
        .any(|t| t.s == iri("pepperoni") && t.p == iri("description")));

    let ttl = format_graph(&graph, GraphFormat::Turtle);
    assert!(ttl.contains("@prefix restaurants: <http://www.semanticweb.org/city/in3067-inm713/2024/restaurants#> ."));
    assert!(ttl.contains("restaurants:pizza_palace a restaurants:Restaurant"));
    assert!(ttl.contains("\"14.00\"^^xsd:decimal"));
}

fn parse_turtle(text: &str) -> BTreeSet<String> {
    oxttl::TurtleParser::new()
        .for_reader(text.as_bytes())
        .map(|t| match t {
            Ok(t) => t.to_string(),
            Err(e) => panic!("invalid Turtle: {e}\n{text}"),
        })
        .collect()
}

fn parse_ntriples(text: &str) -> BTreeSet<String> {
    oxttl::NTriplesParser::new()
        .for_reader(text.as_bytes())
        .map(|t| match t {
            Ok(t) => t.to_string(),
            Err(e) => panic!("invalid N-Triples: {e}\n{text}"),
        })
        .collect()
}

#[test]
fn awkward_names_produce_parseable_output() {
    let csv = "name,address,city,country,postcode,state,categories,menu item,item value,currency,item description\n\
        Pizza ½ Off,1 Main St,São Paulo,Brasil,01000,SP,Pizza,Pizza #1,9.50,BRL,\"Say \\\"ciao\\\"\"\n\
        Joe's (Downtown),9 Elm St,St. Louis,US,63101,MO,Pizza,50% Off Slice,3,USD,\n\
        Señorª Caf²,2 Calle,7th Heaven,España,28001,Madrid,Pizza,{Quattro} <Stagioni>,12,EUR,Four seasons\n";
    let batch = read_csv(csv.as_bytes(), &CsvOptions::default()).unwrap();
    let graph = map(LocalMinter::new(NS), &MappingPlan::pizza_restaurants(), &batch);

    assert!(graph.contains(&iri("pizza_½_off"), &rdf_type(), &iri("Restaurant")));
    assert!(graph.contains(&iri("pizza_%231"), &rdf_type(), &iri("MenuItem")));
    assert!(graph.contains(&iri("50%25_off_slice"), &rdf_type(), &iri("MenuItem")));
    assert!(graph.contains(&iri("%7Bquattro%7D_%3Cstagioni%3E"), &rdf_type(), &iri("MenuItem")));
    assert!(graph.contains(&iri("señorª_caf²"), &rdf_type(), &iri("Restaurant")));
    assert!(graph.contains(&iri("7th_heaven"), &rdf_type(), &iri("City")));
    assert!(graph.contains(&iri("pizza_%231"), &iri("name"), &Term::string("Pizza #1")));

    let from_turtle = parse_turtle(&format_graph(&graph, GraphFormat::Turtle));
    let from_ntriples = parse_ntriples(&format_graph(&graph, GraphFormat::NTriples));
    assert_eq!(from_turtle.len(), graph.len());
    assert_eq!(from_turtle, from_ntriples);
}

#[test]
fn fresh_mode_output_is_deterministic() {
    let plan = MappingPlan::pizza_restaurants();
    let csv = "name,address,city,country,postcode,state,categories,menu item,item value,currency,item description\n\
        B Pizza,2 Road,Leeds,UK,LS1,West Yorkshire,Pizza,Calzone,9,GBP,Folded\n\
        A Pizza,1 Road,York,UK,YO1,North Yorkshire,Pizza,Calzone,8,GBP,\n";
    let batch = read_csv(csv.as_bytes(), &CsvOptions::default()).unwrap();

    let first = format_graph(&map(LocalMinter::new(NS), &plan, &batch), GraphFormat::Turtle);
    let second = format_graph(&map(LocalMinter::new(NS), &plan, &batch), GraphFormat::Turtle);
    assert_eq!(first, second);
}

#[test]
fn unresolved_entity_without_type_rule() {
    let batch = capital_table();
    let registry = pizza_kg_mapping::UriRegistry::new();
    let mut graph = Graph::new();
    let err = pizza_kg_mapping::rules::map_object(
        &batch,
        "city",
        "country",
        &iri("cityIsLocatedIn"),
        &registry,
        &mut graph,
    )
    .unwrap_err();
    assert!(matches!(err, MappingError::UnresolvedEntity { .. }));
    assert!(graph.is_empty());
}

/// Knows a few places; fails for names listed in `broken`
struct StubKg {
    calls: Cell<usize>,
    broken: Vec<&'static str>,
}

impl StubKg {
    fn new(broken: Vec<&'static str>) -> Self {
        Self {
            calls: Cell::new(0),
            broken,
        }
    }
}

impl EntitySearch for StubKg {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>> {
        self.calls.set(self.calls.get() + 1);
        if self.broken.iter().any(|b| *b == query) {
            return Err(LookupError::Status {
                backend: "stub",
                status: 500,
            });
        }
        let all = match query {
            "london" => vec![
                KgEntity::new("http://kg.example/london-ontario", "London, Ontario"),
                KgEntity::new("http://kg.example/london", "London"),
            ],
            "united kingdom" => vec![KgEntity::new("http://kg.example/uk", "United Kingdom")],
            _ => Vec::new(),
        };
        Ok(all.into_iter().take(limit).collect())
    }
}

#[test]
fn external_mode_reuses_and_falls_back() {
    let stub = StubKg::new(vec!["france"]);
    let minter = ExternalMinter::new(&stub, LocalMinter::new(NS));
    let graph = map(&minter, &capital_plan(), &capital_table());

    let london = Term::iri("http://kg.example/london");
    let uk = Term::iri("http://kg.example/uk");
    assert!(graph.contains(&london, &rdf_type(), &iri("City")));
    assert!(graph.contains(&london, &iri("isCapitalOf"), &uk));
    // No candidates for Paris, failing service for France: both local
    assert!(graph.contains(&iri("paris"), &iri("cityIsLocatedIn"), &iri("france")));

    assert_eq!(minter.reused(), 2);
    assert_eq!(minter.fallbacks(), 2);
    // One search per distinct name plus one retry for France
    assert_eq!(stub.calls.get(), 5);
}

#[test]
fn external_fallback_matches_fresh_identifier() {
    let stub = StubKg::new(Vec::new());
    let local = LocalMinter::new(NS);
    let external = ExternalMinter::new(&stub, local.clone());
    assert_eq!(external.mint("new york (ny)"), local.mint("new york (ny)"));
}

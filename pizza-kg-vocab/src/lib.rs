//! RDF Vocabulary Constants for the pizza-restaurant knowledge graph
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs
//! used by the mapping, formatting, and CLI crates.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `namespaces` - Namespace IRIs and the prefixes bound to them on output
//! - `restaurants` - Local names of the pizza-restaurants ontology

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
}

/// Namespace IRIs and their conventional prefixes
pub mod namespaces {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

    /// Namespace of the pizza-restaurants ontology
    pub const RESTAURANTS: &str =
        "http://www.semanticweb.org/city/in3067-inm713/2024/restaurants#";

    /// Default prefix bound to [`RESTAURANTS`] in serialized output
    pub const RESTAURANTS_PREFIX: &str = "restaurants";

    /// Prefixes always declared in Turtle output, in declaration order
    pub const STANDARD_PREFIXES: &[(&str, &str)] = &[
        ("owl", OWL),
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
    ];

    /// Expand a `prefix:local` name against the standard prefixes.
    ///
    /// Returns `None` when the prefix is not one of [`STANDARD_PREFIXES`].
    pub fn expand_standard(prefixed: &str) -> Option<String> {
        let (prefix, local) = prefixed.split_once(':')?;
        STANDARD_PREFIXES
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, ns)| format!("{ns}{local}"))
    }
}

/// Local names of the pizza-restaurants ontology
///
/// These are relative to the ontology namespace chosen at run time
/// (by default [`namespaces::RESTAURANTS`]).
pub mod restaurants {
    // Classes
    pub const RESTAURANT: &str = "Restaurant";
    pub const CITY: &str = "City";
    pub const STATE: &str = "State";
    pub const COUNTRY: &str = "Country";
    pub const MENU_ITEM: &str = "MenuItem";

    // Object properties
    pub const LOCATED_IN_CITY: &str = "locatedInCity";
    pub const LOCATED_IN_STATE: &str = "locatedInState";
    pub const LOCATED_IN_COUNTRY: &str = "locatedInCountry";
    pub const SERVES_MENU_ITEM: &str = "servesMenuItem";

    /// Default city-to-country relation, also the fallback of the capital mapping
    pub const CITY_IS_LOCATED_IN: &str = "cityIsLocatedIn";
    /// `"primary"` capital discriminator
    pub const IS_CAPITAL_OF: &str = "isCapitalOf";
    /// `"admin"` capital discriminator
    pub const IS_FIRST_LEVEL_ADMIN_CAPITAL_OF: &str = "isFirstLevelAdminCapitalOf";
    /// `"minor"` capital discriminator
    pub const IS_SECOND_LEVEL_ADMIN_CAPITAL_OF: &str = "isSecondLevelAdminCapitalOf";

    // Datatype properties
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const POSTCODE: &str = "postcode";
    pub const CATEGORIES: &str = "categories";
    pub const AMOUNT: &str = "amount";
    pub const CURRENCY: &str = "currency";
    pub const DESCRIPTION: &str = "description";
}

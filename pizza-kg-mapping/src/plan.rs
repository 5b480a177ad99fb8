//! Mapping plans
//!
//! A [`MappingPlan`] is the ordered list of rules applied to one table,
//! together with the namespace its local names resolve against. Plans are
//! plain serde data so they can be loaded from a config file; the built-in
//! [`MappingPlan::pizza_restaurants`] plan covers the fixed restaurant
//! schema.

use std::collections::HashSet;
use std::fmt;

use pizza_graph_format::is_valid_prefix;
use pizza_graph_ir::{Datatype, Term};
use pizza_kg_tabular::ColumnBatch;
use pizza_kg_vocab::{namespaces, restaurants as r};
use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};

fn default_datatype() -> String {
    "xsd:string".to_string()
}

/// One mapping rule over named columns
///
/// Class, predicate and datatype values are full IRIs, standard prefixed
/// names (`xsd:decimal`), or local names in the plan namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MappingRule {
    /// Type every entity named in `subject` and mint its identifier
    Type { subject: String, class: String },

    /// Attach the `object` cell as a literal of `datatype`
    Literal {
        subject: String,
        object: String,
        predicate: String,
        #[serde(default = "default_datatype")]
        datatype: String,
    },

    /// Relate two already-typed entities
    Object {
        subject: String,
        object: String,
        predicate: String,
    },

    /// Relate a city to a country with a predicate chosen by `value`
    Capital {
        subject: String,
        object: String,
        value: String,
    },
}

impl MappingRule {
    pub fn type_of(subject: &str, class: &str) -> Self {
        MappingRule::Type {
            subject: subject.to_string(),
            class: class.to_string(),
        }
    }

    pub fn literal(subject: &str, object: &str, predicate: &str, datatype: &str) -> Self {
        MappingRule::Literal {
            subject: subject.to_string(),
            object: object.to_string(),
            predicate: predicate.to_string(),
            datatype: datatype.to_string(),
        }
    }

    pub fn object(subject: &str, object: &str, predicate: &str) -> Self {
        MappingRule::Object {
            subject: subject.to_string(),
            object: object.to_string(),
            predicate: predicate.to_string(),
        }
    }

    pub fn capital(subject: &str, object: &str, value: &str) -> Self {
        MappingRule::Capital {
            subject: subject.to_string(),
            object: object.to_string(),
            value: value.to_string(),
        }
    }

    /// Columns read by this rule
    pub fn columns(&self) -> Vec<&str> {
        match self {
            MappingRule::Type { subject, .. } => vec![subject.as_str()],
            MappingRule::Literal {
                subject, object, ..
            }
            | MappingRule::Object {
                subject, object, ..
            } => vec![subject.as_str(), object.as_str()],
            MappingRule::Capital {
                subject,
                object,
                value,
            } => vec![subject.as_str(), object.as_str(), value.as_str()],
        }
    }

    /// Columns whose cells must already name minted entities
    fn entity_columns(&self) -> Vec<&str> {
        match self {
            MappingRule::Type { .. } => Vec::new(),
            MappingRule::Literal { subject, .. } => vec![subject.as_str()],
            MappingRule::Object {
                subject, object, ..
            }
            | MappingRule::Capital {
                subject, object, ..
            } => vec![subject.as_str(), object.as_str()],
        }
    }
}

impl fmt::Display for MappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingRule::Type { subject, class } => write!(f, "type({subject} -> {class})"),
            MappingRule::Literal {
                subject,
                object,
                predicate,
                ..
            } => write!(f, "literal({subject} {predicate} {object})"),
            MappingRule::Object {
                subject,
                object,
                predicate,
            } => write!(f, "object({subject} {predicate} {object})"),
            MappingRule::Capital {
                subject,
                object,
                value,
            } => write!(f, "capital({subject} -> {object} by {value})"),
        }
    }
}

/// Ordered rules plus the ontology namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingPlan {
    pub namespace: String,
    /// Turtle prefix bound to `namespace` in the output
    pub prefix: String,
    pub rules: Vec<MappingRule>,
}

impl MappingPlan {
    pub fn new(namespace: impl Into<String>, rules: Vec<MappingRule>) -> Self {
        Self {
            namespace: namespace.into(),
            prefix: namespaces::RESTAURANTS_PREFIX.to_string(),
            rules,
        }
    }

    /// Rules for the fixed pizza-restaurant schema
    pub fn pizza_restaurants() -> Self {
        let string = "xsd:string";
        let rules = vec![
            MappingRule::type_of("name", r::RESTAURANT),
            MappingRule::type_of("city", r::CITY),
            MappingRule::type_of("state", r::STATE),
            MappingRule::type_of("country", r::COUNTRY),
            MappingRule::type_of("menu item", r::MENU_ITEM),
            MappingRule::literal("name", "name", r::NAME, string),
            MappingRule::literal("name", "address", r::ADDRESS, string),
            MappingRule::literal("name", "postcode", r::POSTCODE, string),
            MappingRule::literal("name", "categories", r::CATEGORIES, string),
            MappingRule::literal("city", "city", r::NAME, string),
            MappingRule::literal("state", "state", r::NAME, string),
            MappingRule::literal("country", "country", r::NAME, string),
            MappingRule::literal("menu item", "menu item", r::NAME, string),
            MappingRule::literal("menu item", "item value", r::AMOUNT, "xsd:decimal"),
            MappingRule::literal("menu item", "currency", r::CURRENCY, string),
            MappingRule::literal("menu item", "item description", r::DESCRIPTION, string),
            MappingRule::object("name", "city", r::LOCATED_IN_CITY),
            MappingRule::object("city", "state", r::LOCATED_IN_STATE),
            MappingRule::object("state", "country", r::LOCATED_IN_COUNTRY),
            MappingRule::object("city", "country", r::CITY_IS_LOCATED_IN),
            MappingRule::object("name", "menu item", r::SERVES_MENU_ITEM),
        ];
        Self::new(namespaces::RESTAURANTS, rules)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_rules(mut self, rules: Vec<MappingRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Expand a class, predicate or datatype name to a full IRI
    pub fn resolve_iri(&self, name: &str) -> String {
        if name.contains("://") || name.starts_with("urn:") {
            return name.to_string();
        }
        namespaces::expand_standard(name).unwrap_or_else(|| format!("{}{name}", self.namespace))
    }

    pub(crate) fn resolve_term(&self, name: &str) -> Term {
        Term::iri(self.resolve_iri(name))
    }

    pub(crate) fn resolve_datatype(&self, name: &str) -> Datatype {
        Datatype::from_iri(self.resolve_iri(name))
    }

    /// Check the plan against a table before running it.
    ///
    /// Fails when the prefix is not a Turtle prefix label, when a rule reads
    /// a column the table lacks, or when a rule needs entities from a column
    /// that no earlier type rule covers.
    pub fn validate(&self, batch: &ColumnBatch) -> MappingResult<()> {
        if self.namespace.is_empty() {
            return Err(MappingError::InvalidPlan(
                "namespace must not be empty".to_string(),
            ));
        }
        if !is_valid_prefix(&self.prefix) {
            return Err(MappingError::InvalidPlan(format!(
                "prefix '{}' is not a valid Turtle prefix label \
                 (letters, digits, '_', '-' and '.'; must start with a letter)",
                self.prefix
            )));
        }

        let mut typed: HashSet<&str> = HashSet::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            for col in rule.columns() {
                if batch.column_by_name(col).is_none() {
                    return Err(MappingError::ColumnNotFound {
                        column: col.to_string(),
                    });
                }
            }
            for col in rule.entity_columns() {
                if !typed.contains(col) {
                    return Err(MappingError::InvalidPlan(format!(
                        "rule {} `{rule}` uses entities from column '{col}' \
                         before any type rule mints them",
                        idx + 1
                    )));
                }
            }
            if let MappingRule::Type { subject, .. } = rule {
                typed.insert(subject.as_str());
            }
        }
        Ok(())
    }
}

impl Default for MappingPlan {
    fn default() -> Self {
        Self::pizza_restaurants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_kg_tabular::PIZZA_COLUMNS;
    use pizza_kg_vocab::xsd;

    fn pizza_header_batch() -> ColumnBatch {
        ColumnBatch::from_rows(PIZZA_COLUMNS, &[]).unwrap()
    }

    #[test]
    fn test_builtin_plan_validates_against_schema() {
        let plan = MappingPlan::pizza_restaurants();
        plan.validate(&pizza_header_batch()).unwrap();
        assert_eq!(plan.namespace, namespaces::RESTAURANTS);
        assert_eq!(plan.prefix, "restaurants");
    }

    #[test]
    fn test_resolve_iri() {
        let plan = MappingPlan::new("http://example.org/r#", Vec::new());
        assert_eq!(plan.resolve_iri("City"), "http://example.org/r#City");
        assert_eq!(plan.resolve_iri("xsd:decimal"), xsd::DECIMAL);
        assert_eq!(
            plan.resolve_iri("http://schema.org/Restaurant"),
            "http://schema.org/Restaurant"
        );
        assert_eq!(plan.resolve_iri("urn:x:1"), "urn:x:1");
        assert!(plan.resolve_datatype("xsd:string").is_xsd_string());
    }

    #[test]
    fn test_validate_missing_column() {
        let batch = ColumnBatch::from_rows(&["city"], &[]).unwrap();
        let plan = MappingPlan::new(
            "http://example.org/r#",
            vec![
                MappingRule::type_of("city", "City"),
                MappingRule::type_of("country", "Country"),
            ],
        );
        let err = plan.validate(&batch).unwrap_err();
        assert!(matches!(err, MappingError::ColumnNotFound { ref column } if column == "country"));
    }

    #[test]
    fn test_validate_rule_order() {
        let batch = ColumnBatch::from_rows(&["city", "country"], &[]).unwrap();
        let plan = MappingPlan::new(
            "http://example.org/r#",
            vec![
                MappingRule::type_of("city", "City"),
                MappingRule::object("city", "country", "cityIsLocatedIn"),
                MappingRule::type_of("country", "Country"),
            ],
        );
        let err = plan.validate(&batch).unwrap_err();
        assert!(matches!(err, MappingError::InvalidPlan(ref msg) if msg.contains("'country'")));

        // Literal rules only need their subject typed
        let plan = MappingPlan::new(
            "http://example.org/r#",
            vec![
                MappingRule::type_of("city", "City"),
                MappingRule::literal("city", "country", "countryName", "xsd:string"),
            ],
        );
        plan.validate(&batch).unwrap();
    }

    #[test]
    fn test_validate_empty_namespace() {
        let batch = ColumnBatch::from_rows(&["city"], &[]).unwrap();
        let plan = MappingPlan::new("", vec![MappingRule::type_of("city", "City")]);
        assert!(matches!(
            plan.validate(&batch),
            Err(MappingError::InvalidPlan(_))
        ));
    }

    #[test]
    fn test_validate_prefix_label() {
        let batch = ColumnBatch::from_rows(&["city"], &[]).unwrap();
        let plan = MappingPlan::new("http://example.org/r#", vec![MappingRule::type_of("city", "City")]);

        for bad in ["restaurants#", "1r", "r.", "my prefix", "r:"] {
            let err = plan.clone().with_prefix(bad).validate(&batch).unwrap_err();
            assert!(
                matches!(err, MappingError::InvalidPlan(ref msg) if msg.contains(bad)),
                "prefix {bad:?} should be rejected"
            );
        }
        for good in ["r", "pizza-kg", "ex.v2", ""] {
            plan.clone().with_prefix(good).validate(&batch).unwrap();
        }
    }

    #[test]
    fn test_rules_from_toml() {
        let text = r#"
            namespace = "http://example.org/r#"
            prefix = "r"

            [[rules]]
            kind = "type"
            subject = "city"
            class = "City"

            [[rules]]
            kind = "literal"
            subject = "city"
            object = "city"
            predicate = "name"

            [[rules]]
            kind = "capital"
            subject = "city"
            object = "country"
            value = "capital"
        "#;
        let plan: MappingPlan = toml::from_str(text).unwrap();
        assert_eq!(plan.prefix, "r");
        assert_eq!(
            plan.rules,
            vec![
                MappingRule::type_of("city", "City"),
                MappingRule::literal("city", "city", "name", "xsd:string"),
                MappingRule::capital("city", "country", "capital"),
            ]
        );
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(
            MappingRule::object("city", "country", "cityIsLocatedIn").to_string(),
            "object(city cityIsLocatedIn country)"
        );
    }
}

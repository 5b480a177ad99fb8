//! RDF term types: IRI and typed literal
//!
//! Terms are the building blocks of statements. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A literal (lexical value + explicit datatype)

use crate::Datatype;
use std::cmp::Ordering;
use std::sync::Arc;

/// An RDF term (subject, predicate, or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - Literal values are kept verbatim; no coercion to the datatype's value
///   space happens here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// Full expanded IRI
    Iri(Arc<str>),

    /// Literal value with explicit datatype
    Literal {
        /// Lexical form, taken verbatim from the source
        value: Arc<str>,
        /// Datatype (always present)
        datatype: Datatype,
    },
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::xsd_string())
    }

    /// Create a typed literal with the given datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype,
        }
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    /// IRIs sort before literals; literals order by datatype, then value.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Term::Iri(a), Term::Iri(b)) => a.cmp(b),
            (Term::Iri(_), Term::Literal { .. }) => Ordering::Less,
            (Term::Literal { .. }, Term::Iri(_)) => Ordering::Greater,
            (
                Term::Literal {
                    value: v1,
                    datatype: d1,
                },
                Term::Literal {
                    value: v2,
                    datatype: d2,
                },
            ) => (d1, v1).cmp(&(d2, v2)),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Literal { value, datatype } => {
                write!(f, "\"{}\"", value)?;
                if datatype.is_xsd_string() {
                    Ok(())
                } else {
                    write!(f, "^^<{}>", datatype.as_iri())
                }
            }
        }
    }
}

//! External knowledge-graph lookup for URI reuse.
//!
//! This crate defines the narrow contract the mapping layer consumes when it
//! reuses identifiers from a public knowledge graph instead of minting fresh
//! ones:
//!
//! - [`EntitySearch`]: `(name, limit) -> candidates`, each candidate exposing
//!   an identifier and a human-readable label
//! - [`isub`]: the I-Sub lexical similarity used to pick the best candidate
//!
//! Three HTTP backends are provided (Google Knowledge Graph Search, Wikidata
//! `wbsearchentities`, DBpedia Lookup). All use a blocking client bounded by
//! connect and request timeouts; retry and fallback policy belongs to the
//! caller.

pub mod backends;
mod config;
mod entity;
mod error;
mod similarity;

pub use backends::{DbpediaLookup, GoogleKgLookup, KgBackend, WikidataLookup};
pub use config::{LookupConfig, DEFAULT_API_KEY_ENV, DEFAULT_LIMIT};
pub use entity::{EntitySearch, KgEntity};
pub use error::{LookupError, LookupResult};
pub use similarity::isub;

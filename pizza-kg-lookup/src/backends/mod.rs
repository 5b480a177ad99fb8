//! HTTP entity-search backends
//!
//! Each backend owns a blocking `reqwest` client built from a
//! [`LookupConfig`] and turns the service's JSON into [`KgEntity`] values.
//! Response parsing is split into plain functions over deserialized bodies
//! so it can be tested without a network.

mod dbpedia;
mod google;
mod wikidata;

pub use dbpedia::DbpediaLookup;
pub use google::GoogleKgLookup;
pub use wikidata::WikidataLookup;

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::config::LookupConfig;
use crate::entity::{EntitySearch, KgEntity};
use crate::error::{LookupError, LookupResult};

/// Which external knowledge graph to reuse identifiers from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KgBackend {
    Google,
    Wikidata,
    Dbpedia,
}

impl KgBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            KgBackend::Google => "google",
            KgBackend::Wikidata => "wikidata",
            KgBackend::Dbpedia => "dbpedia",
        }
    }

    /// Build the HTTP client for this backend
    pub fn build(self, config: &LookupConfig) -> LookupResult<Box<dyn EntitySearch>> {
        Ok(match self {
            KgBackend::Google => Box::new(GoogleKgLookup::from_config(config)?),
            KgBackend::Wikidata => Box::new(WikidataLookup::from_config(config)?),
            KgBackend::Dbpedia => Box::new(DbpediaLookup::from_config(config)?),
        })
    }
}

impl std::fmt::Display for KgBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn build_client(config: &LookupConfig) -> LookupResult<Client> {
    Ok(Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .build()?)
}

/// Check status and decode a JSON body
fn decode<T: serde::de::DeserializeOwned>(
    backend: &'static str,
    response: Response,
) -> LookupResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status {
            backend,
            status: status.as_u16(),
        });
    }
    let text = response.text()?;
    serde_json::from_str(&text).map_err(|e| LookupError::Decode {
        backend,
        message: e.to_string(),
    })
}

/// Drop candidates without a usable identifier and cap at `limit`
fn finish(mut entities: Vec<KgEntity>, limit: usize) -> Vec<KgEntity> {
    entities.retain(|e| !e.ident.is_empty());
    entities.truncate(limit);
    entities
}

//! DBpedia Lookup service

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::{build_client, decode, finish};
use crate::config::LookupConfig;
use crate::entity::{EntitySearch, KgEntity};
use crate::error::LookupResult;

const DEFAULT_ENDPOINT: &str = "https://lookup.dbpedia.org/api/search";

const BACKEND: &str = "dbpedia";

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    docs: Vec<Doc>,
}

/// Every field of a DBpedia Lookup doc is an array
#[derive(Debug, Deserialize)]
struct Doc {
    #[serde(default)]
    resource: Vec<String>,
    #[serde(default)]
    label: Vec<String>,
    #[serde(default)]
    comment: Vec<String>,
    #[serde(rename = "typeName", default)]
    type_names: Vec<String>,
}

/// Remove the `<B>`-style highlight markup Lookup puts around matches
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

pub(crate) fn parse_response(body: SearchResponse) -> Vec<KgEntity> {
    body.docs
        .into_iter()
        .filter_map(|doc| {
            let ident = doc.resource.into_iter().next()?;
            let label = doc
                .label
                .first()
                .map(|l| strip_tags(l))
                .unwrap_or_default();
            Some(KgEntity {
                ident,
                label,
                description: doc.comment.first().map(|c| strip_tags(c)),
                types: doc.type_names,
            })
        })
        .collect()
}

/// Entity search against DBpedia Lookup
#[derive(Debug)]
pub struct DbpediaLookup {
    client: Client,
    endpoint: String,
}

impl DbpediaLookup {
    pub fn from_config(config: &LookupConfig) -> LookupResult<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

impl EntitySearch for DbpediaLookup {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>> {
        let limit_param = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("query", query),
                ("format", "JSON"),
                ("maxResults", limit_param.as_str()),
            ])
            .send()?;
        let body: SearchResponse = decode(BACKEND, response)?;
        let entities = finish(parse_response(body), limit);
        debug!(backend = BACKEND, query, candidates = entities.len(), "entity search");
        Ok(entities)
    }
}

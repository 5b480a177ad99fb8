//! Google Knowledge Graph Search API

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::{build_client, decode, finish};
use crate::config::LookupConfig;
use crate::entity::{EntitySearch, KgEntity};
use crate::error::{LookupError, LookupResult};

const DEFAULT_ENDPOINT: &str = "https://kgsearch.googleapis.com/v1/entities:search";

/// Google KG compact ids look like `kg:/m/04jpl`
const KG_PREFIX: &str = "kg:";
const KG_NAMESPACE: &str = "http://g.co/kg";

const BACKEND: &str = "google";

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "itemListElement", default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    result: Option<ResultBody>,
}

#[derive(Debug, Deserialize)]
struct ResultBody {
    #[serde(rename = "@id")]
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "@type", default)]
    types: Vec<String>,
}

/// Expand a `kg:` compact id to an IRI
fn expand_id(id: &str) -> String {
    match id.strip_prefix(KG_PREFIX) {
        Some(rest) => format!("{KG_NAMESPACE}{rest}"),
        None => id.to_string(),
    }
}

pub(crate) fn parse_response(body: SearchResponse) -> Vec<KgEntity> {
    body.items
        .into_iter()
        .filter_map(|item| item.result)
        .filter_map(|r| {
            let id = r.id?;
            let label = r.name?;
            Some(KgEntity {
                ident: expand_id(&id),
                label,
                description: r.description,
                types: r.types,
            })
        })
        .collect()
}

/// Entity search against the Google Knowledge Graph
pub struct GoogleKgLookup {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl GoogleKgLookup {
    /// Requires `config.api_key`
    pub fn from_config(config: &LookupConfig) -> LookupResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            LookupError::Config("Google KG lookup requires an API key".to_string())
        })?;
        Ok(Self {
            client: build_client(config)?,
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            language: config.language.clone(),
        })
    }
}

impl std::fmt::Debug for GoogleKgLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleKgLookup")
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

impl EntitySearch for GoogleKgLookup {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>> {
        let limit_param = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("limit", limit_param.as_str()),
                ("languages", self.language.as_str()),
                ("indent", "false"),
                ("key", self.api_key.as_str()),
            ])
            .send()?;
        let body: SearchResponse = decode(BACKEND, response)?;
        let entities = finish(parse_response(body), limit);
        debug!(backend = BACKEND, query, candidates = entities.len(), "entity search");
        Ok(entities)
    }
}

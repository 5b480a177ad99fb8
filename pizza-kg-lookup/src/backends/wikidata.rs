//! Wikidata `wbsearchentities` API

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::{build_client, decode, finish};
use crate::config::LookupConfig;
use crate::entity::{EntitySearch, KgEntity};
use crate::error::LookupResult;

const DEFAULT_ENDPOINT: &str = "https://www.wikidata.org/w/api.php";
const ENTITY_NAMESPACE: &str = "http://www.wikidata.org/entity/";

const BACKEND: &str = "wikidata";

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    search: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: String,
    concepturi: Option<String>,
    label: Option<String>,
    description: Option<String>,
}

pub(crate) fn parse_response(body: SearchResponse) -> Vec<KgEntity> {
    body.search
        .into_iter()
        .map(|item| KgEntity {
            ident: item
                .concepturi
                .unwrap_or_else(|| format!("{ENTITY_NAMESPACE}{}", item.id)),
            label: item.label.unwrap_or_default(),
            description: item.description,
            types: Vec::new(),
        })
        .collect()
}

/// Entity search against Wikidata
#[derive(Debug)]
pub struct WikidataLookup {
    client: Client,
    endpoint: String,
    language: String,
}

impl WikidataLookup {
    pub fn from_config(config: &LookupConfig) -> LookupResult<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            language: config.language.clone(),
        })
    }
}

impl EntitySearch for WikidataLookup {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn search(&self, query: &str, limit: usize) -> LookupResult<Vec<KgEntity>> {
        let limit_param = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "wbsearchentities"),
                ("format", "json"),
                ("type", "item"),
                ("search", query),
                ("language", self.language.as_str()),
                ("limit", limit_param.as_str()),
            ])
            .send()?;
        let body: SearchResponse = decode(BACKEND, response)?;
        let entities = finish(parse_response(body), limit);
        debug!(backend = BACKEND, query, candidates = entities.len(), "entity search");
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let json = r#"{
            "searchinfo": {"search": "paris"},
            "search": [
                {
                    "id": "Q90",
                    "concepturi": "http://www.wikidata.org/entity/Q90",
                    "label": "Paris",
                    "description": "capital city of France"
                },
                {"id": "Q830149"}
            ],
            "success": 1
        }"#;
        let body: SearchResponse = serde_json::from_str(json).unwrap();
        let entities = parse_response(body);

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].ident, "http://www.wikidata.org/entity/Q90");
        assert_eq!(entities[0].label, "Paris");
        // Missing concepturi is rebuilt from the id
        assert_eq!(entities[1].ident, "http://www.wikidata.org/entity/Q830149");
        assert_eq!(entities[1].label, "");
    }
}

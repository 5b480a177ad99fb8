//! HTTP lookup configuration

use std::time::Duration;

/// Number of candidates requested per name
pub const DEFAULT_LIMIT: usize = 5;

/// Environment variable read for the Google KG API key
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_KG_API_KEY";

const DEFAULT_USER_AGENT: &str = concat!("pizza-kg/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every HTTP backend
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Language code for labels (Wikidata, Google)
    pub language: String,
    /// API key (Google KG only)
    pub api_key: Option<String>,
    /// Override the backend's default endpoint
    pub endpoint: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(5_000),
            request_timeout: Duration::from_millis(10_000),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            language: "en".to_string(),
            api_key: None,
            endpoint: None,
        }
    }
}

impl LookupConfig {
    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

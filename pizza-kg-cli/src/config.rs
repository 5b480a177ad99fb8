//! `pizza-kg.toml` support.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Hardcoded defaults

use crate::error::{CliError, CliResult};
use pizza_graph_format::GraphFormat;
use pizza_kg_lookup::{LookupConfig, DEFAULT_API_KEY_ENV, DEFAULT_LIMIT};
use pizza_kg_mapping::{MappingPlan, MappingRule};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "pizza-kg.toml";

const DEFAULT_RETRIES: u32 = 1;

// ---------------------------------------------------------------------------
// File config serde types (all Option, absence means "not set in file")
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub mapping: Option<MappingFileConfig>,
    #[serde(default)]
    pub lookup: Option<LookupFileConfig>,
    #[serde(default)]
    pub output: Option<OutputFileConfig>,
}

/// The `[mapping]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingFileConfig {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    /// Replaces the built-in rules entirely
    pub rules: Option<Vec<MappingRule>>,
}

/// The `[lookup]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupFileConfig {
    pub limit: Option<usize>,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub retries: Option<u32>,
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    pub language: Option<String>,
    pub endpoint: Option<String>,
}

/// The `[output]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputFileConfig {
    pub dir: Option<PathBuf>,
    pub name: Option<String>,
    pub format: Option<GraphFormat>,
}

/// Load the config file.
///
/// An explicit path must exist. Without one, `./pizza-kg.toml` is used when
/// present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> CliResult<FileConfig> {
    let path = match explicit {
        Some(p) => {
            if !p.is_file() {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !p.is_file() {
                debug!("No config file found, using CLI args and defaults only");
                return Ok(FileConfig::default());
            }
            p
        }
    };

    info!(path = %path.display(), "Loading configuration file");
    let content = std::fs::read_to_string(&path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
    parse(&content)
}

pub fn parse(content: &str) -> CliResult<FileConfig> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    Ok(toml::from_str(content)?)
}

impl FileConfig {
    /// Mapping plan: built-in rules, file overrides, then `--namespace`
    pub fn plan(&self, cli_namespace: Option<&str>) -> MappingPlan {
        let mut plan = MappingPlan::pizza_restaurants();
        if let Some(m) = &self.mapping {
            if let Some(ns) = &m.namespace {
                plan = plan.with_namespace(ns.clone());
            }
            if let Some(prefix) = &m.prefix {
                plan = plan.with_prefix(prefix.clone());
            }
            if let Some(rules) = &m.rules {
                plan = plan.with_rules(rules.clone());
            }
        }
        if let Some(ns) = cli_namespace {
            plan = plan.with_namespace(ns);
        }
        plan
    }

    /// Lookup settings; `env` resolves environment variables
    pub fn lookup<F>(&self, cli_api_key: Option<&str>, env: F) -> LookupSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.lookup.clone().unwrap_or_default();
        let api_key_env = file
            .api_key_env
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

        let api_key = cli_api_key
            .map(str::to_string)
            .or_else(|| env(&api_key_env).filter(|k| !k.is_empty()))
            .or(file.api_key);

        let defaults = LookupConfig::default();
        let mut config = LookupConfig {
            api_key,
            ..defaults.clone()
        }
        .with_timeouts(
            file.connect_timeout_ms
                .map_or(defaults.connect_timeout, Duration::from_millis),
            file.request_timeout_ms
                .map_or(defaults.request_timeout, Duration::from_millis),
        );
        if let Some(language) = file.language {
            config = config.with_language(language);
        }
        if let Some(endpoint) = file.endpoint {
            config = config.with_endpoint(endpoint);
        }

        LookupSettings {
            config,
            limit: file.limit.unwrap_or(DEFAULT_LIMIT),
            retries: file.retries.unwrap_or(DEFAULT_RETRIES),
            api_key_env,
        }
    }

    pub fn output_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.output.as_ref().and_then(|o| o.dir.clone()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn output_name(&self, cli: Option<&str>, input: &Path) -> CliResult<String> {
        let name = match cli
            .map(str::to_string)
            .or_else(|| self.output.as_ref().and_then(|o| o.name.clone()))
        {
            Some(name) => name,
            None => input
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    CliError::Usage(format!(
                        "cannot derive an output name from {}; pass --output-name",
                        input.display()
                    ))
                })?,
        };
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(CliError::Usage(format!(
                "invalid output name '{name}': must be a non-empty file name"
            )));
        }
        Ok(name)
    }

    pub fn output_format(&self, cli: Option<GraphFormat>) -> GraphFormat {
        cli.or_else(|| self.output.as_ref().and_then(|o| o.format))
            .unwrap_or_default()
    }
}

/// Resolved `[lookup]` settings
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub config: LookupConfig,
    pub limit: usize,
    pub retries: u32,
    /// Variable consulted for the API key, for error messages
    pub api_key_env: String,
}

/// Reject a zero candidate limit; `setting` names its source in the message
pub fn positive_limit(limit: usize, setting: &str) -> CliResult<usize> {
    if limit == 0 {
        return Err(CliError::Usage(format!("{setting} must be at least 1")));
    }
    Ok(limit)
}

/// `<dir>/<name>-<task label>.<ext>`
pub fn output_path(dir: &Path, name: &str, task_label: &str, format: GraphFormat) -> PathBuf {
    dir.join(format!("{name}-{task_label}.{}", format.extension()))
}

use colored::Colorize;
use pizza_kg_lookup::LookupError;
use pizza_kg_mapping::MappingError;
use pizza_kg_tabular::TabularError;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Config file unreadable or invalid.
    Config(String),
    /// Bad input path or malformed CSV.
    Input(String),
    /// Plan does not fit the table, or an entity was never typed.
    Mapping(MappingError),
    /// External knowledge graph could not be queried.
    Lookup(LookupError),
    /// Google KG selected without an API key.
    MissingApiKey { env: String },
    /// Writing the output failed.
    Output(String),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Mapping(e @ MappingError::UnresolvedEntity { .. }) => write!(
                f,
                "{} {e}\n  {} add a type rule for that column before the rules that use it",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Mapping(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Lookup(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::MissingApiKey { env } => write!(
                f,
                "{} the Google Knowledge Graph requires an API key\n  {} pass --api-key, set {env}, or set [lookup].api_key in pizza-kg.toml",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<TabularError> for CliError {
    fn from(e: TabularError) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<MappingError> for CliError {
    fn from(e: MappingError) -> Self {
        match e {
            MappingError::Tabular(inner) => CliError::Input(inner.to_string()),
            other => CliError::Mapping(other),
        }
    }
}

impl From<LookupError> for CliError {
    fn from(e: LookupError) -> Self {
        CliError::Lookup(e)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(format!("TOML parse error: {e}"))
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;

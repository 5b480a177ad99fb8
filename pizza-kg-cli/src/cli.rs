use clap::{Args, Parser, Subcommand, ValueEnum};
use pizza_graph_format::GraphFormat;
use pizza_kg_lookup::KgBackend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pizza-kg",
    about = "Map pizza-restaurant CSV data to an RDF knowledge graph",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (default: ./pizza-kg.toml if present)
    #[arg(long, global = true, env = "PIZZA_KG_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a CSV file to a graph file
    Map(MapArgs),

    /// Show external knowledge-graph candidates for a name
    Lookup {
        /// Entity name to search for
        name: String,

        /// Knowledge graph to search
        #[arg(long, value_enum, default_value = "wikidata")]
        backend: BackendArg,

        /// Maximum number of candidates
        #[arg(long)]
        limit: Option<usize>,

        /// Google KG API key (overrides config and environment)
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[derive(Args)]
pub struct MapArgs {
    /// Input CSV file
    pub input: PathBuf,

    /// Fresh URIs or URIs reused from an external knowledge graph
    #[arg(long, value_enum, default_value = "rdf1")]
    pub task: Task,

    /// Directory for the output file
    #[arg(long, env = "PIZZA_KG_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base name of the output file (default: input file stem)
    #[arg(long)]
    pub output_name: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Ontology namespace for minted identifiers and local names
    #[arg(long, env = "PIZZA_KG_NAMESPACE")]
    pub namespace: Option<String>,

    /// Google KG API key (overrides config and environment)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Mapping task; selects the URI minting strategy and the output file label
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// Fresh identifiers in the ontology namespace
    Rdf1,
    /// Reuse identifiers from the Google Knowledge Graph
    Google,
    /// Reuse identifiers from Wikidata
    Wikidata,
    /// Reuse identifiers from DBpedia
    Dbpedia,
}

impl Task {
    /// Label appended to the output file name
    pub fn label(self) -> &'static str {
        match self {
            Task::Rdf1 => "Subtask_RDF1",
            Task::Google => "Subtask_RDF3_GoogleKG",
            Task::Wikidata => "Subtask_RDF3_WikidataKG",
            Task::Dbpedia => "Subtask_RDF3_DBpedia",
        }
    }

    /// External knowledge graph, `None` for fresh identifiers
    pub fn backend(self) -> Option<KgBackend> {
        match self {
            Task::Rdf1 => None,
            Task::Google => Some(KgBackend::Google),
            Task::Wikidata => Some(KgBackend::Wikidata),
            Task::Dbpedia => Some(KgBackend::Dbpedia),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BackendArg {
    Google,
    Wikidata,
    Dbpedia,
}

impl From<BackendArg> for KgBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Google => KgBackend::Google,
            BackendArg::Wikidata => KgBackend::Wikidata,
            BackendArg::Dbpedia => KgBackend::Dbpedia,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Turtle,
    Ntriples,
}

impl From<FormatArg> for GraphFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Turtle => GraphFormat::Turtle,
            FormatArg::Ntriples => GraphFormat::NTriples,
        }
    }
}

use crate::cli::MapArgs;
use crate::config::{self, positive_limit, FileConfig, LookupSettings};
use crate::error::{CliError, CliResult};
use colored::Colorize;
use pizza_graph_format::write_graph;
use pizza_graph_ir::Graph;
use pizza_kg_lookup::{EntitySearch, KgBackend, LookupError};
use pizza_kg_mapping::{
    ExternalMinter, LocalMinter, Mapper, MappingPlan, MappingReport, UriMinter,
};
use pizza_kg_tabular::{read_csv_path, ColumnBatch, CsvOptions};
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::info;

pub fn run(args: MapArgs, file: &FileConfig) -> CliResult<()> {
    let plan = file.plan(args.namespace.as_deref());
    let format = file.output_format(args.format.map(Into::into));
    let dir = file.output_dir(args.output_dir.as_deref());
    let name = file.output_name(args.output_name.as_deref(), &args.input)?;
    let path = config::output_path(&dir, &name, args.task.label(), format);

    let local = LocalMinter::new(plan.namespace.clone());
    let external = match args.task.backend() {
        None => None,
        Some(backend) => {
            let lookup = file.lookup(args.api_key.as_deref(), |var| std::env::var(var).ok());
            Some((backend, external_minter(backend, &lookup, local.clone())?))
        }
    };

    let batch = read_csv_path(&args.input, &CsvOptions::default())?;

    let (mut graph, report) = match &external {
        None => map_with(local, &plan, &batch)?,
        Some((backend, minter)) => {
            let result = map_with(minter, &plan, &batch)?;
            info!(
                backend = %backend,
                reused = minter.reused(),
                fallbacks = minter.fallbacks(),
                "external identifier reuse"
            );
            result
        }
    };
    graph.canonicalize();

    fs::create_dir_all(&dir)
        .map_err(|e| CliError::Output(format!("cannot create {}: {e}", dir.display())))?;
    let out = File::create(&path)
        .map_err(|e| CliError::Output(format!("cannot create {}: {e}", path.display())))?;
    write_graph(&graph, format, BufWriter::new(out))
        .map_err(|e| CliError::Output(format!("failed writing {}: {e}", path.display())))?;

    println!(
        "{} {} triples ({} entities from {} rows) to {}",
        "Wrote".green().bold(),
        graph.len(),
        report.entities,
        report.rows,
        path.display()
    );
    Ok(())
}

fn map_with<M: UriMinter>(
    minter: M,
    plan: &MappingPlan,
    batch: &ColumnBatch,
) -> CliResult<(Graph, MappingReport)> {
    let mut mapper = Mapper::new(minter);
    let report = mapper.run(plan, batch)?;
    Ok((mapper.into_graph(), report))
}

/// Build the search client for `backend`, mapping a missing key to a helpful error
pub fn build_search(
    backend: KgBackend,
    lookup: &LookupSettings,
) -> CliResult<Box<dyn EntitySearch>> {
    backend.build(&lookup.config).map_err(|e| match e {
        LookupError::Config(_) if backend == KgBackend::Google => CliError::MissingApiKey {
            env: lookup.api_key_env.clone(),
        },
        other => CliError::from(other),
    })
}

fn external_minter(
    backend: KgBackend,
    lookup: &LookupSettings,
    local: LocalMinter,
) -> CliResult<ExternalMinter<Box<dyn EntitySearch>>> {
    let limit = positive_limit(lookup.limit, "[lookup].limit")?;
    Ok(ExternalMinter::new(build_search(backend, lookup)?, local)
        .with_limit(limit)
        .with_retries(lookup.retries))
}

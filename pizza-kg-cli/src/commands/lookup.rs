use super::map::build_search;
use crate::config::{positive_limit, FileConfig};
use crate::error::CliResult;
use colored::Colorize;
use pizza_kg_lookup::{isub, EntitySearch, KgBackend};
use pizza_kg_mapping::{best_candidate, normalize_name};

pub fn run(
    name: &str,
    backend: KgBackend,
    limit: Option<usize>,
    api_key: Option<&str>,
    file: &FileConfig,
) -> CliResult<()> {
    let lookup = file.lookup(api_key, |var| std::env::var(var).ok());
    let limit = match limit {
        Some(limit) => positive_limit(limit, "--limit")?,
        None => positive_limit(lookup.limit, "[lookup].limit")?,
    };

    let search = build_search(backend, &lookup)?;

    // Same query the external minter sends
    let query = normalize_name(name);
    let candidates = search.search(&query, limit)?;
    if candidates.is_empty() {
        println!("No {backend} candidates for '{name}'");
        return Ok(());
    }

    let best = best_candidate(&query, &candidates).map(|c| c.ident.as_str());
    for candidate in &candidates {
        let score = isub(&query, &candidate.label);
        let line = format!("{score:.3}  {}  {}", candidate.label, candidate.ident);
        if Some(candidate.ident.as_str()) == best {
            println!("{} {}", "*".green().bold(), line.bold());
        } else {
            println!("  {line}");
        }
    }
    Ok(())
}

//! `lpa search <kind> <term>` – query a search endpoint like the editor widgets.

use anyhow::{Context, Result};
use lpa_core::config::LpaConfig;
use lpa_core::search::{EntityKind, SearchClient, SearchOutcome, SearchResults};
use std::sync::Arc;

use super::{page_target, transport};

fn print_results(results: &SearchResults) {
    if results.results.is_empty() {
        println!("No matches.");
        return;
    }
    println!("{:<8} {}", "ID", "TEXT");
    for option in &results.results {
        println!("{:<8} {}", option.id.to_string(), option.text);
    }
}

pub async fn run_search(
    cfg: &LpaConfig,
    kind: EntityKind,
    term: &str,
    url: Option<&str>,
    prefix: Option<&str>,
    json: bool,
) -> Result<()> {
    let url = url
        .or(cfg.origin.as_deref())
        .context("no --url given and no `origin` in the config file")?;
    let target = page_target(cfg, url, prefix)?;
    let client = Arc::new(SearchClient::new(target.origin, target.prefix, transport(cfg)));

    let outcome = client.search_async(kind, term.to_string()).await?;
    let SearchOutcome::Fresh(results) = outcome else {
        // Only one query is issued per invocation.
        anyhow::bail!("search response was superseded");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

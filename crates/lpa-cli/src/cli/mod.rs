//! CLI for the live-permissions admin client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lpa_core::config;

use commands::{
    run_completions, run_delete, run_prefix, run_remove_owner, run_search, run_tables,
    run_widgets,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lpa")]
#[command(about = "LPA: admin client for live-permissions tables and search endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the mount prefix and resource name derived from a page URL.
    Prefix {
        /// Full URL of the admin page.
        page_url: String,
        /// Mount prefix to use instead of inferring it.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Delete one record of the table shown at a page URL.
    Delete {
        /// Full URL of the table page (e.g. http://host/-/live-permissions/users).
        page_url: String,
        /// Primary key of the record.
        id: String,
        /// CSRF token from the page's `csrftoken` field.
        #[arg(long)]
        csrftoken: Option<String>,
        /// Mount prefix to use instead of inferring it.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Remove an owner from the resource managed at a page URL.
    RemoveOwner {
        /// Full URL of the owner-management page.
        page_url: String,
        /// Id of the user to remove.
        user_id: String,
        /// CSRF token from the page's `csrftoken` field.
        #[arg(long)]
        csrftoken: Option<String>,
        /// Mount prefix to use instead of inferring it.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Query a search endpoint the way the editor's widgets do.
    Search {
        /// action-resource, user or group.
        kind: lpa_core::search::EntityKind,
        /// Search term.
        term: String,
        /// Site or page URL (defaults to `origin` from the config file).
        #[arg(long)]
        url: Option<String>,
        /// Mount prefix to use instead of inferring it.
        #[arg(long)]
        prefix: Option<String>,
        /// Print the widget response envelope as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the search widget registrations for a mount prefix.
    Widgets {
        /// Mount prefix (defaults to the config file's, else root).
        #[arg(long)]
        prefix: Option<String>,
    },

    /// List the tables managed by the plugin.
    Tables,

    /// Print shell completions.
    Completions {
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Prefix { page_url, prefix } => {
                run_prefix(&cfg, &page_url, prefix.as_deref())?
            }
            CliCommand::Delete {
                page_url,
                id,
                csrftoken,
                prefix,
            } => run_delete(&cfg, &page_url, &id, csrftoken, prefix.as_deref()).await?,
            CliCommand::RemoveOwner {
                page_url,
                user_id,
                csrftoken,
                prefix,
            } => run_remove_owner(&cfg, &page_url, &user_id, csrftoken, prefix.as_deref()).await?,
            CliCommand::Search {
                kind,
                term,
                url,
                prefix,
                json,
            } => run_search(&cfg, kind, &term, url.as_deref(), prefix.as_deref(), json).await?,
            CliCommand::Widgets { prefix } => run_widgets(&cfg, prefix.as_deref()),
            CliCommand::Tables => run_tables(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

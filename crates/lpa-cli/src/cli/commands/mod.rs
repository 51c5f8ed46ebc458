//! CLI command handlers. Each command is in its own file.

mod completions;
mod delete;
mod prefix;
mod remove_owner;
mod search;
mod tables;
mod widgets;

pub use completions::run_completions;
pub use delete::run_delete;
pub use prefix::run_prefix;
pub use remove_owner::run_remove_owner;
pub use search::run_search;
pub use tables::run_tables;
pub use widgets::run_widgets;

use anyhow::{Context, Result};
use lpa_core::config::LpaConfig;
use lpa_core::http::{parse_origin, CurlTransport};
use lpa_core::location::{last_path_part, resolve_mount_prefix, LocationPath, MountPrefix};
use std::sync::Arc;

/// Origin, prefix and resource derived from a page URL.
struct PageTarget {
    origin: url::Url,
    prefix: MountPrefix,
    resource: Option<String>,
}

/// `--prefix` wins over the config file's `mount_prefix`; otherwise the
/// prefix is inferred from the page path.
fn page_target(cfg: &LpaConfig, page_url: &str, prefix: Option<&str>) -> Result<PageTarget> {
    let origin = parse_origin(page_url)?;
    let location = LocationPath::from_url(page_url)?;
    let prefix = resolve_mount_prefix(&location, prefix.or(cfg.mount_prefix.as_deref()));
    Ok(PageTarget {
        origin,
        prefix,
        resource: last_path_part(&location).map(str::to_string),
    })
}

impl PageTarget {
    fn resource(&self) -> Result<&str> {
        self.resource
            .as_deref()
            .context("page URL has no resource name (empty path)")
    }
}

fn transport(cfg: &LpaConfig) -> Arc<CurlTransport> {
    Arc::new(CurlTransport::new(cfg.http.curl_options()))
}

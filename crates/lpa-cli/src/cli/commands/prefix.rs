//! `lpa prefix <page-url>` – show the derived mount prefix and resource name.

use anyhow::Result;
use lpa_core::config::LpaConfig;
use lpa_core::location::{infer_mount_prefix, LocationPath};

use super::page_target;

pub fn run_prefix(cfg: &LpaConfig, page_url: &str, prefix: Option<&str>) -> Result<()> {
    let target = page_target(cfg, page_url, prefix)?;
    let shown = if target.prefix.is_root() {
        "(root)"
    } else {
        target.prefix.as_str()
    };
    println!("prefix:   {}", shown);
    println!("resource: {}", target.resource.as_deref().unwrap_or("-"));

    let overridden = prefix.or(cfg.mount_prefix.as_deref()).is_some();
    if !overridden && !infer_mount_prefix(&LocationPath::from_url(page_url)?).bounded {
        println!("warning: no plugin segment ('-' or 'live_permissions') in the path; prefix spans the whole path");
    }
    Ok(())
}

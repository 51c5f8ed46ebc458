//! `lpa delete <page-url> <id>` – delete one record of the page's table.

use anyhow::{Context, Result};
use lpa_core::config::LpaConfig;
use lpa_core::mutation::{CsrfToken, MutationClient};
use lpa_core::table::{delete_record, PageEffect};

use super::{page_target, transport};

pub async fn run_delete(
    cfg: &LpaConfig,
    page_url: &str,
    id: &str,
    csrftoken: Option<String>,
    prefix: Option<&str>,
) -> Result<()> {
    let target = page_target(cfg, page_url, prefix)?;
    let resource = target.resource()?.to_string();
    let client = MutationClient::new(target.origin.clone(), transport(cfg));
    let csrf = csrftoken.and_then(CsrfToken::new);

    let effect = tokio::task::spawn_blocking({
        let id = id.to_string();
        let prefix = target.prefix.clone();
        move || delete_record(&client, csrf.as_ref(), &prefix, &resource, &id)
    })
    .await
    .context("delete task join")??;

    match effect {
        PageEffect::Reload => println!("Deleted {} {}", target.resource()?, id),
        PageEffect::Navigate(url) => println!("Deleted {} {}; reload {}", target.resource()?, id, url),
    }
    Ok(())
}

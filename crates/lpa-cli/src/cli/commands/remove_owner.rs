//! `lpa remove-owner <page-url> <user-id>` – remove an owner from a resource.

use anyhow::{Context, Result};
use lpa_core::config::LpaConfig;
use lpa_core::mutation::{CsrfToken, MutationClient};
use lpa_core::table::{remove_owner, PageEffect};

use super::{page_target, transport};

pub async fn run_remove_owner(
    cfg: &LpaConfig,
    page_url: &str,
    user_id: &str,
    csrftoken: Option<String>,
    prefix: Option<&str>,
) -> Result<()> {
    let target = page_target(cfg, page_url, prefix)?;
    let resource = target.resource()?.to_string();
    let client = MutationClient::new(target.origin.clone(), transport(cfg));
    let csrf = csrftoken.and_then(CsrfToken::new);

    let effect = tokio::task::spawn_blocking({
        let user_id = user_id.to_string();
        let prefix = target.prefix.clone();
        let page_url = page_url.to_string();
        move || remove_owner(&client, csrf.as_ref(), &prefix, &resource, &user_id, &page_url)
    })
    .await
    .context("remove-owner task join")??;

    match effect {
        PageEffect::Navigate(url) => {
            println!("Removed user {} from {}; reload {}", user_id, target.resource()?, url)
        }
        PageEffect::Reload => println!("Removed user {} from {}", user_id, target.resource()?),
    }
    Ok(())
}

//! Delete-control handlers: build the endpoint path, send the mutation and
//! translate the status into a page effect.

use super::model::TableScope;
use crate::http::FormBody;
use crate::location::endpoint::{owner_manage_path, record_delete_path};
use crate::location::MountPrefix;
use crate::mutation::{CsrfToken, MutationClient, MutationError};

/// What the page should do after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Full reload of the current page.
    Reload,
    /// Navigate to the given URL (the current URL, with fresh query state).
    Navigate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RowActionError {
    #[error("no {scope} row at index {index}")]
    RowOutOfRange { scope: TableScope, index: usize },
    #[error("{scope} table has no delete controls installed")]
    NotInstalled { scope: TableScope },
    #[error("page has no {scope} table")]
    NoSuchTable { scope: TableScope },
    #[error("no identifier in {scope} row {index}")]
    MissingIdentifier { scope: TableScope, index: usize },
    #[error("page path has no resource name")]
    MissingResourceName,
    #[error("server rejected the request with HTTP {status}")]
    Rejected { status: u32 },
    #[error(transparent)]
    Mutation(#[from] MutationError),
}

/// Deletes one record: `DELETE {prefix}/-/live-permissions/{resource}/{id}`.
/// 204 means the page should reload.
pub fn delete_record(
    client: &MutationClient,
    csrf: Option<&CsrfToken>,
    prefix: &MountPrefix,
    resource: &str,
    id: &str,
) -> Result<PageEffect, RowActionError> {
    let path = record_delete_path(prefix, resource, id);
    let response = client.mutate(csrf, &path, None)?;
    if response.is_no_content() {
        tracing::info!(%path, "record deleted");
        Ok(PageEffect::Reload)
    } else {
        tracing::warn!(%path, status = response.status, "record delete rejected");
        Err(RowActionError::Rejected {
            status: response.status,
        })
    }
}

/// Removes an owner from a resource: `DELETE {prefix}/-/live-permissions/db/manage/{resource}`
/// with form body `user_id={id}`. 204 means navigate to `current_url`.
pub fn remove_owner(
    client: &MutationClient,
    csrf: Option<&CsrfToken>,
    prefix: &MountPrefix,
    resource: &str,
    user_id: &str,
    current_url: &str,
) -> Result<PageEffect, RowActionError> {
    let path = owner_manage_path(prefix, resource);
    let form = FormBody::new().field("user_id", user_id);
    let response = client.mutate(csrf, &path, Some(&form))?;
    if response.is_no_content() {
        tracing::info!(%path, user_id, "owner removed");
        Ok(PageEffect::Navigate(current_url.to_string()))
    } else {
        tracing::warn!(%path, user_id, status = response.status, "owner removal rejected");
        Err(RowActionError::Rejected {
            status: response.status,
        })
    }
}

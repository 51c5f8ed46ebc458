//! One loaded admin page: its location, CSRF field, rendered tables, and the
//! wiring that runs on page ready.
//!
//! The mount prefix is derived once, when the page is constructed, and used
//! for every request the page issues.

use crate::http::{parse_origin, Transport, TransportError};
use crate::location::{last_path_part, resolve_mount_prefix, LocationPath, MountPrefix};
use crate::mutation::{CsrfToken, MutationClient};
use crate::search::{register_widgets, SearchClient, WidgetRegistration};
use crate::table::{delete_record, remove_owner, PageEffect, RowActionError, Table, TableScope};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] TransportError),
    #[error(transparent)]
    Location(#[from] anyhow::Error),
}

/// Host-provided page state.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Host-injected mount prefix; skips inference when set.
    pub prefix_override: Option<String>,
    /// Value of the hidden `csrftoken` field, if the page has one.
    pub csrf_field: Option<String>,
    pub records: Table,
    /// Owning-principals table (owner-management pages only).
    pub owners: Option<Table>,
}

#[derive(Debug)]
pub struct AdminPage {
    url: String,
    location: LocationPath,
    prefix: MountPrefix,
    csrf_field: Option<String>,
    records: Table,
    owners: Option<Table>,
    mutations: MutationClient,
}

impl AdminPage {
    pub fn new(
        page_url: &str,
        options: PageOptions,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, PageError> {
        let origin = parse_origin(page_url)?;
        let location = LocationPath::from_url(page_url)?;
        let prefix = resolve_mount_prefix(&location, options.prefix_override.as_deref());
        tracing::debug!(page_url, %prefix, "admin page loaded");

        Ok(Self {
            url: page_url.to_string(),
            location,
            prefix,
            csrf_field: options.csrf_field,
            records: options.records,
            owners: options.owners,
            mutations: MutationClient::new(origin, transport),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mount_prefix(&self) -> &MountPrefix {
        &self.prefix
    }

    /// Last path segment: the table/entity the page manages.
    pub fn resource_name(&self) -> Option<&str> {
        last_path_part(&self.location)
    }

    pub fn records(&self) -> &Table {
        &self.records
    }

    pub fn owners(&self) -> Option<&Table> {
        self.owners.as_ref()
    }

    /// Replaces the hidden field's value (the host may rotate the token).
    pub fn set_csrf_field(&mut self, value: Option<String>) {
        self.csrf_field = value;
    }

    /// Search client for this page's widgets, sharing the page's prefix.
    pub fn search_client(&self, transport: Arc<dyn Transport>) -> SearchClient {
        SearchClient::new(self.mutations.origin().clone(), self.prefix.clone(), transport)
    }

    /// Page-ready wiring: installs delete controls and returns the three
    /// search widget registrations.
    pub fn setup(&mut self) -> [WidgetRegistration; 3] {
        let widgets = register_widgets(&self.prefix);
        self.install_delete_controls();
        widgets
    }

    /// Installs delete controls on the record table and, if present, the
    /// owners table. Safe to call repeatedly.
    pub fn install_delete_controls(&mut self) {
        let records = self.records.install_delete_controls();
        let owners = self
            .owners
            .as_mut()
            .map(Table::install_delete_controls)
            .unwrap_or(false);
        tracing::debug!(records, owners, "delete controls installed");
    }

    fn table(&self, scope: TableScope) -> Result<&Table, RowActionError> {
        match scope {
            TableScope::Records => Ok(&self.records),
            TableScope::Owners => self
                .owners
                .as_ref()
                .ok_or(RowActionError::NoSuchTable { scope }),
        }
    }

    /// Handles a click on the delete control of row `index` in `scope`.
    ///
    /// The CSRF token is read from the page field at click time.
    pub fn click_delete(&self, scope: TableScope, index: usize) -> Result<PageEffect, RowActionError> {
        let table = self.table(scope)?;
        if !table.is_augmented() {
            return Err(RowActionError::NotInstalled { scope });
        }
        let row = table
            .rows
            .get(index)
            .ok_or(RowActionError::RowOutOfRange { scope, index })?;

        let id = match scope {
            TableScope::Records => row.primary_key(),
            TableScope::Owners => row.first_cell(),
        }
        .ok_or(RowActionError::MissingIdentifier { scope, index })?;
        let resource = self.resource_name().ok_or(RowActionError::MissingResourceName)?;
        let csrf = self.csrf_field.clone().and_then(CsrfToken::new);

        match scope {
            TableScope::Records => {
                delete_record(&self.mutations, csrf.as_ref(), &self.prefix, resource, id)
            }
            TableScope::Owners => remove_owner(
                &self.mutations,
                csrf.as_ref(),
                &self.prefix,
                resource,
                id,
                &self.url,
            ),
        }
    }
}

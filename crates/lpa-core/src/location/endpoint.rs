//! Endpoint paths of the live-permissions plugin, relative to the page origin.

use super::MountPrefix;

/// Route namespace of the plugin's mutation endpoints.
pub const PLUGIN_ROUTE: &str = "/-/live-permissions";
/// Path of the plugin's database (search endpoints live under it).
pub const PLUGIN_DATABASE: &str = "/live_permissions";

/// `{prefix}/-/live-permissions/{resource}/{id}`: deletes one record.
pub fn record_delete_path(prefix: &MountPrefix, resource: &str, id: &str) -> String {
    prefix.join(&format!("{PLUGIN_ROUTE}/{resource}/{id}"))
}

/// `{prefix}/-/live-permissions/{table}/{id}`: create (`id == "new"`) or update a record.
pub fn record_edit_path(prefix: &MountPrefix, table: &str, id_or_new: &str) -> String {
    record_delete_path(prefix, table, id_or_new)
}

/// `{prefix}/-/live-permissions/db/manage/{resource}`: owner management for a resource.
pub fn owner_manage_path(prefix: &MountPrefix, resource: &str) -> String {
    prefix.join(&format!("{PLUGIN_ROUTE}/db/manage/{resource}"))
}

/// `{prefix}/live_permissions/{file}`: one of the JSON search endpoints.
pub fn database_path(prefix: &MountPrefix, file: &str) -> String {
    prefix.join(&format!("{PLUGIN_DATABASE}/{file}"))
}

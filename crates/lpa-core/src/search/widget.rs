//! Search widget registrations for the permission editor form.

use super::EntityKind;
use crate::location::MountPrefix;

/// Everything the host search widget needs to drive one remote-search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRegistration {
    pub kind: EntityKind,
    /// DOM id of the input the widget is attached to.
    pub element_id: &'static str,
    pub placeholder: &'static str,
    /// Prefixed endpoint path.
    pub url: String,
    pub data_type: &'static str,
}

fn element_id(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ActionResource => "actions-resources-id",
        EntityKind::User => "user-id",
        EntityKind::Group => "group-id",
    }
}

fn placeholder(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::ActionResource => "Select an action",
        EntityKind::User => "Select a user",
        EntityKind::Group => "Select a group",
    }
}

/// One registration per entity kind, all under the same mount prefix.
pub fn register_widgets(prefix: &MountPrefix) -> [WidgetRegistration; 3] {
    EntityKind::ALL.map(|kind| WidgetRegistration {
        kind,
        element_id: element_id(kind),
        placeholder: placeholder(kind),
        url: kind.endpoint_path(prefix),
        data_type: "json",
    })
}

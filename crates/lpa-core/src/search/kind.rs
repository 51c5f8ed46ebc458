//! Searchable entity kinds and their fixed per-kind parameters.

use crate::location::endpoint::database_path;
use crate::location::MountPrefix;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    ActionResource,
    User,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind '{0}' (expected action-resource, user or group)")]
pub struct UnknownEntityKind(pub String);

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::ActionResource, EntityKind::User, EntityKind::Group];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::ActionResource => "action-resource",
            EntityKind::User => "user",
            EntityKind::Group => "group",
        }
    }

    /// Record field the typed term is matched against with `__contains`.
    pub fn filter_field(self) -> &'static str {
        match self {
            EntityKind::ActionResource => "action",
            EntityKind::User => "value",
            EntityKind::Group => "name",
        }
    }

    /// JSON endpoint file under the plugin database.
    pub fn endpoint_file(self) -> &'static str {
        match self {
            EntityKind::ActionResource => "actions_resources.json",
            EntityKind::User => "users.json",
            EntityKind::Group => "groups.json",
        }
    }

    /// `{prefix}/live_permissions/<file>.json`
    pub fn endpoint_path(self, prefix: &MountPrefix) -> String {
        database_path(prefix, self.endpoint_file())
    }

    pub(crate) fn index(self) -> usize {
        match self {
            EntityKind::ActionResource => 0,
            EntityKind::User => 1,
            EntityKind::Group => 2,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

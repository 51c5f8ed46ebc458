//! Page location modeling: path segments, mount prefix and endpoint paths.
//!
//! Everything here is a pure function of the page URL (and an optional
//! host-injected prefix override), so it can be exercised without a browser
//! or a network.

pub mod endpoint;
mod path;
mod prefix;

pub use path::{last_path_part, LocationPath};
pub use prefix::{
    infer_mount_prefix, resolve_mount_prefix, MountPrefix, PrefixInference, NAMESPACE_SENTINELS,
};

/// Tables managed by the live-permissions plugin.
pub const KNOWN_TABLES: [&str; 5] = [
    "users",
    "groups",
    "group-membership",
    "actions_resources",
    "permissions",
];

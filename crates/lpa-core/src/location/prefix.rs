//! Mount prefix inference.
//!
//! The host application may be served at the site root or behind an arbitrary
//! path prefix (e.g. `/admin`). The plugin's own routes always start with one
//! of two sentinel segments, so everything before the first sentinel is the
//! mount prefix.

use std::fmt;

/// Path segments that mark the start of the plugin's own routing:
/// `-` (as in `/-/live-permissions/...`) and the plugin database name.
pub const NAMESPACE_SENTINELS: [&str; 2] = ["-", "live_permissions"];

/// Path prefix under which the host application is mounted.
///
/// Either empty or of the form `/seg1/seg2`; never a bare `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MountPrefix(String);

impl MountPrefix {
    /// Root mount (empty prefix).
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Uses a host-provided prefix verbatim.
    pub fn verbatim(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prepends the prefix to an absolute path (`/...`). Every outbound request
    /// path goes through here.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for MountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Result of inferring the prefix from a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixInference {
    pub prefix: MountPrefix,
    /// False when no sentinel was found and the prefix swallowed the whole path.
    pub bounded: bool,
}

fn is_sentinel(segment: &str) -> bool {
    NAMESPACE_SENTINELS.contains(&segment)
}

/// Infers the mount prefix from path segments.
///
/// Segments are accumulated until the first sentinel (exclusive). If the path
/// starts with a sentinel the prefix is empty. If no sentinel appears at all,
/// the entire path becomes the prefix and `bounded` is false.
pub fn infer_mount_prefix(path: &super::LocationPath) -> PrefixInference {
    let segments = path.segments();
    let stop = segments.iter().position(|s| is_sentinel(s));
    let retained = &segments[..stop.unwrap_or(segments.len())];

    let prefix = if retained.is_empty() {
        MountPrefix::root()
    } else {
        MountPrefix(format!("/{}", retained.join("/")))
    };

    PrefixInference {
        prefix,
        bounded: stop.is_some(),
    }
}

/// Resolves the mount prefix for a page.
///
/// A host-injected `override_prefix` is returned verbatim and inference is
/// skipped entirely.
pub fn resolve_mount_prefix(
    path: &super::LocationPath,
    override_prefix: Option<&str>,
) -> MountPrefix {
    if let Some(prefix) = override_prefix {
        return MountPrefix::verbatim(prefix);
    }

    let inference = infer_mount_prefix(path);
    if !inference.bounded && !path.is_empty() {
        tracing::warn!(
            prefix = %inference.prefix,
            "no plugin namespace segment in page path; mount prefix spans the whole path"
        );
    }
    inference.prefix
}

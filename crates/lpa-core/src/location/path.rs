//! Location path segments extracted from a page URL.

use anyhow::{Context, Result};

/// Ordered, non-empty path segments of the current page URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationPath {
    segments: Vec<String>,
}

impl LocationPath {
    /// Splits a raw pathname (e.g. `/admin/-/live-permissions/users`) on `/`,
    /// dropping empty segments.
    pub fn from_pathname(pathname: &str) -> Self {
        let segments = pathname
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Parses a full URL and keeps only its path; query and fragment are ignored.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url).with_context(|| format!("invalid page URL: {url}"))?;
        Ok(Self::from_pathname(parsed.path()))
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::<String>::into)
            .filter(|s| !s.is_empty())
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Returns the final non-empty segment, used as the resource name of the page.
///
/// Returns `None` for the root path.
pub fn last_path_part(path: &LocationPath) -> Option<&str> {
    path.segments.last().map(String::as_str)
}

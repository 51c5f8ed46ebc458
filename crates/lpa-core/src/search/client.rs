//! Remote search against the plugin's JSON endpoints.

use super::query::{build_query, encode_query};
use super::results::{parse_results, SearchResults};
use super::sequence::SearchSequencer;
use super::EntityKind;
use crate::http::{resolve_url, HttpRequest, Method, Transport, TransportError};
use crate::location::MountPrefix;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("search endpoint {url} returned HTTP {status}")]
    Status { url: String, status: u32 },
    #[error("search response is not a JSON array of records: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("search task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result of one query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Fresh(SearchResults),
    /// A newer query for the same kind was issued before this response arrived.
    Stale,
}

/// Issues search queries for the three widgets of one page.
///
/// Each entity kind has its own sequencer, so typing into one widget never
/// invalidates another widget's responses.
pub struct SearchClient {
    origin: url::Url,
    prefix: MountPrefix,
    transport: Arc<dyn Transport>,
    sequencers: [SearchSequencer; 3],
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("origin", &self.origin.as_str())
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    pub fn new(origin: url::Url, prefix: MountPrefix, transport: Arc<dyn Transport>) -> Self {
        Self {
            origin,
            prefix,
            transport,
            sequencers: Default::default(),
        }
    }

    /// Full URL of the query for `kind` and `term`.
    pub fn query_url(&self, kind: EntityKind, term: &str) -> Result<String, TransportError> {
        let path = format!(
            "{}?{}",
            kind.endpoint_path(&self.prefix),
            encode_query(&build_query(kind, term))
        );
        resolve_url(&self.origin, &path)
    }

    /// Sends one query and maps the response, discarding it if a newer query
    /// for the same kind was issued meanwhile.
    pub fn search(&self, kind: EntityKind, term: &str) -> Result<SearchOutcome, SearchError> {
        let sequencer = &self.sequencers[kind.index()];
        let ticket = sequencer.issue();

        let url = self.query_url(kind, term)?;
        let response = self.transport.send(&HttpRequest::new(Method::Get, url.clone()))?;

        if !sequencer.is_current(ticket) {
            tracing::debug!(%kind, term, ?ticket, "discarding stale search response");
            return Ok(SearchOutcome::Stale);
        }
        if !response.is_success() {
            return Err(SearchError::Status {
                url,
                status: response.status,
            });
        }
        Ok(SearchOutcome::Fresh(parse_results(kind, &response.body)?))
    }

    /// [`search`](Self::search) on tokio's blocking pool.
    pub async fn search_async(
        self: Arc<Self>,
        kind: EntityKind,
        term: String,
    ) -> Result<SearchOutcome, SearchError> {
        tokio::task::spawn_blocking(move || self.search(kind, &term)).await?
    }
}

//! Mutation error type.

use crate::http::TransportError;

/// Why a mutation produced no response.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// The page carries no (or an empty) `csrftoken` field; nothing was sent.
    #[error("no csrf token available on the page")]
    MissingCsrfToken,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("mutation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

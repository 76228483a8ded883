//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `FactService`.
///
/// None of these reach the learner verbatim; the modal shows one of two
/// fixed fallback messages instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactError {
    #[error("fact service is not configured")]
    Disabled,
    #[error("fact service returned an empty response")]
    EmptyResponse,
    #[error("fact request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("fact request timed out")]
    Timeout,
    #[error("fact response is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for FactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err.without_url())
        }
    }
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

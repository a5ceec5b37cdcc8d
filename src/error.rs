//! Error types for pr-automerge

use thiserror::Error;

/// Errors raised by the glue around the merge engine.
///
/// Merge failures themselves are not errors: they end up in
/// [`crate::merge::MergeOutcome::Failed`].
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API returned an error or an unexpected payload
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic platform failure (used by test doubles and adapters)
    #[error("platform error: {0}")]
    Platform(String),

    /// No usable token could be found
    #[error("authentication error: {0}")]
    Auth(String),

    /// Invalid caller input
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The webhook event payload could not be read
    #[error("invalid event payload: {0}")]
    Event(String),

    /// Filesystem or process error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// HTTP transport error
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

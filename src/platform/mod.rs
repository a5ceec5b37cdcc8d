//! Platform services
//!
//! The merge engine only needs two remote operations: read the state of a
//! pull request, and merge it. Both sit behind [`PullRequestService`] so the
//! engine can be driven by GitHub or by a test double.

mod github;

pub use github::{
    GitHubService, MERGE_PULL_REQUEST_MUTATION, PULL_REQUEST_QUERY, merge_pull_request_mutation,
};

use crate::error::Result;
use crate::types::{MergeRequest, PullRequestRef, PullRequestSnapshot};
use async_trait::async_trait;

/// Platform service trait for the fetch and merge operations
#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// Fetch the current state of a pull request
    ///
    /// Returns `Ok(None)` when the API answered without data (unknown
    /// repository, unknown PR, or a PR without commits). That case is a
    /// silent no-op for the caller, not an error.
    async fn fetch_pull_request(&self, pr: &PullRequestRef) -> Result<Option<PullRequestSnapshot>>;

    /// Issue a single merge mutation
    ///
    /// The error of a rejected merge carries the human-readable message
    /// returned by the API; the retry logic classifies on that text.
    async fn merge_pull_request(&self, request: &MergeRequest) -> Result<()>;
}

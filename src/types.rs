//! Core types for pr-automerge

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identity of the pull request an event refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub number: u64,
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// PR state (open, closed, merged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrState {
    /// PR is open and can be merged
    Open,
    /// PR was closed without merging
    Closed,
    /// PR was merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Merged => write!(f, "MERGED"),
        }
    }
}

/// Whether GitHub thinks the PR can be merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mergeable {
    /// No conflicts with the base branch
    Mergeable,
    /// Conflicts must be resolved first
    Conflicting,
    /// GitHub is still computing the merge state
    Unknown,
}

/// State of a pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Reviewer approved the changes
    Approved,
    /// Reviewer asked for changes
    ChangesRequested,
    /// Review left only comments
    Commented,
    /// Review was dismissed
    Dismissed,
    /// Review not yet submitted
    Pending,
    /// Any state this crate does not know about
    #[serde(other)]
    Other,
}

/// Remote state of one pull request, as fetched before merging
///
/// Built once by the platform service and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// GraphQL node ID, the target of the merge mutation
    pub id: String,
    /// Current state of the PR
    pub state: PrState,
    /// Mergeability as reported by GitHub
    pub mergeable: Mergeable,
    /// Whether the PR is already merged
    pub merged: bool,
    /// State of the most recent review, if any
    pub latest_review_state: Option<ReviewState>,
    /// First line of the most recent commit message
    pub commit_headline: String,
    /// Login of the PR author (`None` for deleted accounts)
    pub author_login: Option<String>,
}

/// Merge strategy/method
///
/// Parsed case-insensitively from the GitHub Action input
/// (`SQUASH`, `merge`, `Rebase`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMethod {
    /// Fast-forward the base branch to the head commit
    FastForward,
    /// Create a merge commit
    Merge,
    /// Rebase commits onto base branch
    Rebase,
    /// Squash all commits into one
    #[default]
    Squash,
}

impl MergeMethod {
    /// GraphQL enum literal for the `mergeMethod` argument
    pub const fn as_graphql(self) -> &'static str {
        match self {
            Self::FastForward => "FAST_FORWARD",
            Self::Merge => "MERGE",
            Self::Rebase => "REBASE",
            Self::Squash => "SQUASH",
        }
    }
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_graphql())
    }
}

impl FromStr for MergeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "FAST_FORWARD" => Ok(Self::FastForward),
            "MERGE" => Ok(Self::Merge),
            "REBASE" => Ok(Self::Rebase),
            "SQUASH" => Ok(Self::Squash),
            other => Err(Error::Config(format!(
                "unknown merge method '{other}', expected one of FAST_FORWARD, MERGE, REBASE, SQUASH"
            ))),
        }
    }
}

/// Arguments of a single merge mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// GraphQL node ID of the PR
    pub pull_request_id: String,
    /// Title of the resulting merge commit
    pub commit_headline: String,
    /// Merge method to use
    pub merge_method: MergeMethod,
}

//! Shared test helpers

#![allow(dead_code)]

mod mock_service;
mod reporter;

pub use mock_service::MockPullRequestService;
pub use reporter::{LogLine, RecordingReporter};

use pr_automerge::merge::MergeCriteria;
use pr_automerge::types::{
    Mergeable, MergeMethod, PrState, PullRequestRef, PullRequestSnapshot, ReviewState,
};

pub const PULL_REQUEST_ID: &str = "MDExOlB1bGxSZXF1ZXN0MzE3MDI5MjU4";
pub const COMMIT_HEADLINE: &str = "Update test";
pub const BOT_LOGIN: &str = "dependabot[bot]";

/// PR reference used by every test
pub fn pr_ref() -> PullRequestRef {
    PullRequestRef {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        number: 7,
    }
}

/// Snapshot of an open, approved, mergeable bot PR
pub fn eligible_snapshot() -> PullRequestSnapshot {
    PullRequestSnapshot {
        id: PULL_REQUEST_ID.to_string(),
        state: PrState::Open,
        mergeable: Mergeable::Mergeable,
        merged: false,
        latest_review_state: Some(ReviewState::Approved),
        commit_headline: COMMIT_HEADLINE.to_string(),
        author_login: Some(BOT_LOGIN.to_string()),
    }
}

/// Criteria merging `dependabot[bot]` PRs with squash, no preset
pub fn criteria() -> MergeCriteria {
    MergeCriteria {
        bot_login: BOT_LOGIN.to_string(),
        merge_method: MergeMethod::Squash,
        preset: None,
    }
}

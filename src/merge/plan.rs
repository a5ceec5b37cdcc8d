//! Merge decision - pure function deciding whether to merge
//!
//! No I/O happens here: the snapshot is fetched beforehand by the caller,
//! which keeps every eligibility rule unit-testable.

use crate::preset::Preset;
use crate::types::{Mergeable, MergeMethod, MergeRequest, PrState, PullRequestSnapshot, ReviewState};

/// Caller configuration gating the merge
#[derive(Debug, Clone)]
pub struct MergeCriteria {
    /// Only PRs authored by this login are merged (e.g. `dependabot[bot]`)
    pub bot_login: String,
    /// Merge method passed to the mutation
    pub merge_method: MergeMethod,
    /// Optional version-bump filter on the commit headline
    pub preset: Option<Preset>,
}

/// Why a pull request is not merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The fetch returned no data
    NoData,
    /// The PR is already merged
    AlreadyMerged,
    /// The PR is not open
    NotOpen(PrState),
    /// The PR was opened by someone other than the bot
    NotAuthoredByBot(Option<String>),
    /// The latest review is not an approval
    NotApproved(Option<ReviewState>),
    /// GitHub reports conflicts with the base branch
    Conflicting,
    /// The configured preset rejects the version bump
    PresetMismatch(Preset),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "no pull request data"),
            Self::AlreadyMerged => write!(f, "already merged"),
            Self::NotOpen(state) => write!(f, "not open ({state})"),
            Self::NotAuthoredByBot(Some(login)) => write!(f, "authored by {login}"),
            Self::NotAuthoredByBot(None) => write!(f, "author unknown"),
            Self::NotApproved(Some(state)) => write!(f, "latest review is {state:?}"),
            Self::NotApproved(None) => write!(f, "no review"),
            Self::Conflicting => write!(f, "has merge conflicts"),
            Self::PresetMismatch(preset) => write!(f, "version bump not allowed by {preset:?}"),
        }
    }
}

/// Outcome of evaluating a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDecision {
    /// Do not touch the PR
    Skip(SkipReason),
    /// Attempt the merge
    Merge(MergeRequest),
}

impl MergeDecision {
    /// Whether a merge will be attempted
    pub const fn is_merge(&self) -> bool {
        matches!(self, Self::Merge(_))
    }
}

/// Decide whether to merge (PURE - no I/O, easily testable)
///
/// Rules are checked in order; the first that fails decides the skip
/// reason. `Mergeable::Unknown` is not a blocker: GitHub may still be
/// computing it, and a failed merge is handled by the executor.
#[must_use]
pub fn evaluate(snapshot: Option<&PullRequestSnapshot>, criteria: &MergeCriteria) -> MergeDecision {
    let Some(pr) = snapshot else {
        return MergeDecision::Skip(SkipReason::NoData);
    };

    if pr.merged {
        return MergeDecision::Skip(SkipReason::AlreadyMerged);
    }
    if pr.state != PrState::Open {
        return MergeDecision::Skip(SkipReason::NotOpen(pr.state));
    }
    if pr.author_login.as_deref() != Some(criteria.bot_login.as_str()) {
        return MergeDecision::Skip(SkipReason::NotAuthoredByBot(pr.author_login.clone()));
    }
    if pr.latest_review_state != Some(ReviewState::Approved) {
        return MergeDecision::Skip(SkipReason::NotApproved(pr.latest_review_state));
    }
    if pr.mergeable == Mergeable::Conflicting {
        return MergeDecision::Skip(SkipReason::Conflicting);
    }
    if let Some(preset) = criteria.preset
        && !preset.allows(&pr.commit_headline)
    {
        return MergeDecision::Skip(SkipReason::PresetMismatch(preset));
    }

    MergeDecision::Merge(MergeRequest {
        pull_request_id: pr.id.clone(),
        commit_headline: pr.commit_headline.clone(),
        merge_method: criteria.merge_method,
    })
}

//! Merge engine for a single bot pull request
//!
//! Same split as the rest of the crate:
//! 1. Plan - `evaluate` a fetched snapshot into a `MergeDecision` (pure)
//! 2. Execute - perform the merge with retries (effectful)

mod execute;
mod plan;
mod retry;

pub use execute::{
    AttemptOutcome, MERGE_ERROR_EXPLANATION, MergeAttempt, MergeOutcome, execute_merge,
};
pub use plan::{MergeCriteria, MergeDecision, SkipReason, evaluate};
pub use retry::{
    DEFAULT_BACKOFF_MULTIPLIER, DEFAULT_BASE_DELAY, DEFAULT_MAX_RETRIES, MergeErrorKind,
    RetryPolicy, classify_merge_error,
};

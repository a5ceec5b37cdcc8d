//! Merge execution - effectful operations
//!
//! Takes a `MergeDecision` (created by the pure `evaluate`) and performs the
//! merge via the platform API, retrying with exponential backoff while the
//! failure is classified as retriable.

use crate::merge::plan::{MergeDecision, SkipReason};
use crate::merge::retry::{RetryPolicy, classify_merge_error};
use crate::platform::PullRequestService;
use crate::report::Reporter;
use std::time::Duration;
use tracing::{debug, info};

/// Explanation reported for every failed merge attempt
pub const MERGE_ERROR_EXPLANATION: &str = "An error occurred while merging the Pull Request. This is usually caused by the base branch being out of sync with the target branch. In this case, the base branch must be rebased. Some tools, such as Dependabot, do that automatically.";

/// Result of a single merge call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The merge went through
    Success,
    /// Failed, but classified as retriable
    Retriable(String),
    /// Failed for good (or retriable with no budget left)
    Fatal(String),
}

/// Record of one merge call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeAttempt {
    /// 1-based attempt number
    pub number: u32,
    /// Backoff waited before this attempt (zero for the first)
    pub delay: Duration,
    /// What happened
    pub outcome: AttemptOutcome,
}

/// Terminal state of the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No merge call was made
    Skipped(SkipReason),
    /// The PR was merged
    Merged {
        /// Every attempt, the last one successful
        attempts: Vec<MergeAttempt>,
    },
    /// The merge failed and will not be retried
    Failed {
        /// Error text of the last attempt
        reason: String,
        /// Every attempt, the last one fatal
        attempts: Vec<MergeAttempt>,
    },
}

impl MergeOutcome {
    /// Check if the PR got merged
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }

    /// Attempts made (empty when skipped)
    pub fn attempts(&self) -> &[MergeAttempt] {
        match self {
            Self::Skipped(_) => &[],
            Self::Merged { attempts } | Self::Failed { attempts, .. } => attempts,
        }
    }
}

/// Execute a merge decision (EFFECTFUL)
///
/// Attempts run strictly one after another: attempt `n + 1` starts only
/// after attempt `n` failed and its backoff elapsed. Failures never
/// propagate as errors; they end in [`MergeOutcome::Failed`] after the
/// explanation and the original error have been reported.
pub async fn execute_merge(
    decision: &MergeDecision,
    service: &dyn PullRequestService,
    policy: &RetryPolicy,
    reporter: &dyn Reporter,
) -> MergeOutcome {
    let request = match decision {
        MergeDecision::Skip(reason) => return MergeOutcome::Skipped(reason.clone()),
        MergeDecision::Merge(request) => request,
    };

    let mut attempts = Vec::new();
    let mut attempt = 1;
    let mut delay = Duration::ZERO;

    loop {
        debug!(attempt, max_attempts = policy.max_attempts(), "attempting merge");

        let error = match service.merge_pull_request(request).await {
            Ok(()) => {
                info!(
                    attempt,
                    pull_request_id = %request.pull_request_id,
                    "pull request merged"
                );
                attempts.push(MergeAttempt {
                    number: attempt,
                    delay,
                    outcome: AttemptOutcome::Success,
                });
                return MergeOutcome::Merged { attempts };
            }
            Err(e) => e.to_string(),
        };

        reporter.info(MERGE_ERROR_EXPLANATION);

        let kind = classify_merge_error(&error);
        if !(kind.is_retriable() && policy.can_retry_after(attempt)) {
            reporter.debug(&format!("Original error: {error}."));
            debug!(attempt, ?kind, "merge failed, giving up");
            attempts.push(MergeAttempt {
                number: attempt,
                delay,
                outcome: AttemptOutcome::Fatal(error.clone()),
            });
            return MergeOutcome::Failed {
                reason: error,
                attempts,
            };
        }

        attempts.push(MergeAttempt {
            number: attempt,
            delay,
            outcome: AttemptOutcome::Retriable(error),
        });

        delay = policy.delay_after(attempt);
        tokio::time::sleep(delay).await;
        reporter.info(&format!("Retrying in {}...", delay.as_millis()));
        attempt += 1;
    }
}

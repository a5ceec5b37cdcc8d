//! Retry policy and merge error classification

use std::time::Duration;

/// Default delay before the first retry
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Default growth factor between consecutive retry delays
pub const DEFAULT_BACKOFF_MULTIPLIER: u32 = 4;

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Exponential backoff configuration for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed beyond the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Factor applied to the delay for each further retry
    pub backoff_multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::with_max_retries(DEFAULT_MAX_RETRIES)
    }
}

impl RetryPolicy {
    /// Default backoff with a custom retry budget
    pub const fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: DEFAULT_BASE_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }

    /// Total number of merge calls allowed
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Whether a retriable failure on `attempt` (1-based) may be retried
    pub const fn can_retry_after(&self, attempt: u32) -> bool {
        attempt <= self.max_retries
    }

    /// Delay to wait after failed `attempt` (1-based) before the next one
    ///
    /// `base_delay * multiplier^(attempt - 1)`, saturating on overflow.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = self
            .backoff_multiplier
            .checked_pow(exponent)
            .unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

/// Classification of a failed merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeErrorKind {
    /// The base branch moved during the merge; trying again can succeed
    BaseBranchModified,
    /// Anything else
    Other,
}

impl MergeErrorKind {
    /// Whether the failure is worth retrying
    pub const fn is_retriable(self) -> bool {
        matches!(self, Self::BaseBranchModified)
    }
}

const BASE_BRANCH_MODIFIED: &str = "base branch was modified";

/// Classify a merge error from its message text
///
/// GitHub exposes no error code for this case, so this is a
/// case-insensitive substring match.
pub fn classify_merge_error(message: &str) -> MergeErrorKind {
    if message.to_lowercase().contains(BASE_BRANCH_MODIFIED) {
        MergeErrorKind::BaseBranchModified
    } else {
        MergeErrorKind::Other
    }
}

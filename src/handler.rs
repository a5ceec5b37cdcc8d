//! Pull request event handler
//!
//! Ties the phases together for one pull request: gather the snapshot,
//! evaluate it, execute the merge.

use crate::error::Result;
use crate::merge::{MergeCriteria, MergeOutcome, RetryPolicy, evaluate, execute_merge};
use crate::platform::PullRequestService;
use crate::report::Reporter;
use crate::types::PullRequestRef;
use tracing::debug;

/// Handle a pull request event
///
/// Ineligible pull requests (no data, closed, merged, not approved, not the
/// bot's) are skipped without reporting anything. Only fetch failures are
/// returned as errors; merge failures end in [`MergeOutcome::Failed`].
pub async fn handle_pull_request(
    service: &dyn PullRequestService,
    pr: &PullRequestRef,
    criteria: &MergeCriteria,
    policy: &RetryPolicy,
    reporter: &dyn Reporter,
) -> Result<MergeOutcome> {
    // Phase 1: gather
    let snapshot = service.fetch_pull_request(pr).await?;

    // Phase 2: plan
    let decision = evaluate(snapshot.as_ref(), criteria);
    debug!(%pr, ?decision, "evaluated pull request");

    // Phase 3: execute
    let outcome = execute_merge(&decision, service, policy, reporter).await;
    if let MergeOutcome::Skipped(reason) = &outcome {
        debug!(%pr, %reason, "skipping pull request");
    }
    Ok(outcome)
}

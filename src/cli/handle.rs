//! Handle command - react to one pull request event

use crate::cli::Cli;
use crate::cli::context::CommandContext;
use anyhow::Context;
use pr_automerge::event::is_supported_event;
use pr_automerge::handler::handle_pull_request;
use pr_automerge::merge::MergeOutcome;
use pr_automerge::report::{ActionsReporter, Reporter};
use tracing::info;

/// Run the handler for the event described by `cli`
///
/// A failed merge is reported through the workflow log and still exits
/// successfully; only setup and fetch errors fail the step.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let reporter = ActionsReporter;

    if !is_supported_event(&cli.event_name) {
        reporter.warning(&format!("Unknown event {}, skipping.", cli.event_name));
        return Ok(());
    }

    let Some(ctx) = CommandContext::new(&cli)
        .await
        .context("failed to set up pull request handling")?
    else {
        reporter.warning("Required pull request information is unavailable.");
        return Ok(());
    };

    let outcome = handle_pull_request(
        ctx.platform.as_ref(),
        &ctx.pull_request,
        &ctx.config.criteria,
        &ctx.config.retry,
        &reporter,
    )
    .await
    .with_context(|| format!("failed to handle {}", ctx.pull_request))?;

    match &outcome {
        MergeOutcome::Merged { attempts } => {
            info!(pr = %ctx.pull_request, attempts = attempts.len(), "merged");
        }
        MergeOutcome::Failed { attempts, .. } => {
            info!(pr = %ctx.pull_request, attempts = attempts.len(), "merge failed");
        }
        MergeOutcome::Skipped(reason) => {
            info!(pr = %ctx.pull_request, %reason, "skipped");
        }
    }

    Ok(())
}

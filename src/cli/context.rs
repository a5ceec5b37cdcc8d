//! Shared setup for handling one event

use crate::cli::Cli;
use pr_automerge::auth::get_github_auth;
use pr_automerge::config::ActionConfig;
use pr_automerge::error::Result;
use pr_automerge::event::load_pull_request_event;
use pr_automerge::platform::{GitHubService, PullRequestService};
use pr_automerge::types::PullRequestRef;
use tracing::debug;

/// Everything needed to handle the event
///
/// - Validated action inputs
/// - The pull request named by the event payload
/// - An authenticated platform service
pub struct CommandContext {
    /// Validated configuration
    pub config: ActionConfig,
    /// Pull request the event refers to
    pub pull_request: PullRequestRef,
    /// Platform service (GitHub)
    pub platform: Box<dyn PullRequestService>,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// Returns `Ok(None)` when the event payload does not describe a pull
    /// request. Inputs are validated before any token lookup or network call.
    pub async fn new(cli: &Cli) -> Result<Option<Self>> {
        let config = ActionConfig::from_inputs(&cli.inputs())?;

        let Some(pull_request) = load_pull_request_event(&cli.event_path)? else {
            return Ok(None);
        };

        let auth = get_github_auth(cli.github_token.as_deref()).await?;
        debug!(source = ?auth.source, "resolved GitHub token");

        let platform = GitHubService::new(&auth.token, cli.graphql_url.clone())?;

        Ok(Some(Self {
            config,
            pull_request,
            platform: Box::new(platform),
        }))
    }
}

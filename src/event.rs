//! Webhook event payload
//!
//! GitHub Actions writes the triggering webhook payload to the file named by
//! `GITHUB_EVENT_PATH`. Only the fields needed to address the pull request
//! are read.

use crate::error::{Error, Result};
use crate::types::PullRequestRef;
use serde::Deserialize;
use std::path::Path;

/// Event names this handler reacts to
pub const SUPPORTED_EVENTS: &[&str] = &["pull_request", "pull_request_target"];

/// Whether `event_name` is a pull request event
pub fn is_supported_event(event_name: &str) -> bool {
    SUPPORTED_EVENTS.contains(&event_name)
}

#[derive(Deserialize)]
struct PullRequestEvent {
    pull_request: Option<EventPullRequest>,
    repository: Option<EventRepository>,
}

#[derive(Deserialize)]
struct EventPullRequest {
    number: u64,
}

#[derive(Deserialize)]
struct EventRepository {
    name: String,
    owner: EventOwner,
}

#[derive(Deserialize)]
struct EventOwner {
    login: String,
}

/// Extract the pull request reference from a webhook payload
///
/// Returns `None` when the payload has no `pull_request` or `repository`.
pub fn parse_pull_request_event(payload: &str) -> Result<Option<PullRequestRef>> {
    let event: PullRequestEvent = serde_json::from_str(payload)
        .map_err(|e| Error::Event(format!("failed to parse event payload: {e}")))?;

    let (Some(pull_request), Some(repository)) = (event.pull_request, event.repository) else {
        return Ok(None);
    };

    Ok(Some(PullRequestRef {
        owner: repository.owner.login,
        repo: repository.name,
        number: pull_request.number,
    }))
}

/// Read and parse the event payload file
pub fn load_pull_request_event(path: &Path) -> Result<Option<PullRequestRef>> {
    let payload = std::fs::read_to_string(path)
        .map_err(|e| Error::Event(format!("failed to read {}: {e}", path.display())))?;
    parse_pull_request_event(&payload)
}

//! Command-line interface
//!
//! Every flag falls back to the environment variable GitHub Actions sets for
//! the matching action input (`INPUT_*`) or runner context (`GITHUB_*`).

mod context;
mod handle;

use clap::{ArgAction, Parser, builder::BoolishValueParser};
use pr_automerge::config::ActionInputs;
use std::path::PathBuf;
use url::Url;

pub use handle::run;

/// Merge approved bot pull requests from CI
#[derive(Parser, Debug)]
#[command(name = "pr-automerge")]
#[command(about = "Merge approved bot pull requests from CI, retrying when the base branch moves")]
#[command(version)]
pub struct Cli {
    /// Login of the bot whose pull requests get merged
    #[arg(long, env = "INPUT_GITHUB_LOGIN")]
    pub github_login: Option<String>,

    /// GitHub token (falls back to GITHUB_TOKEN, GH_TOKEN, then `gh auth token`)
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Merge method: FAST_FORWARD, MERGE, REBASE or SQUASH
    #[arg(long, env = "INPUT_MERGE_METHOD")]
    pub merge_method: Option<String>,

    /// Only merge some version bumps: DEPENDABOT_MINOR or DEPENDABOT_PATCH
    #[arg(long, env = "INPUT_PRESET")]
    pub preset: Option<String>,

    /// Retries after the first merge attempt when the base branch moved
    #[arg(long, env = "INPUT_MAXIMUM_RETRIES")]
    pub maximum_retries: Option<String>,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "pull_request")]
    pub event_name: String,

    /// Path to the webhook event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// GraphQL endpoint
    #[arg(
        long,
        env = "GITHUB_GRAPHQL_URL",
        default_value = "https://api.github.com/graphql"
    )]
    pub graphql_url: Url,

    /// Enable debug logging on stderr
    #[arg(
        long,
        env = "RUNNER_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,
}

impl Cli {
    /// Action inputs carried by the parsed flags
    pub fn inputs(&self) -> ActionInputs {
        ActionInputs {
            github_login: self.github_login.clone(),
            merge_method: self.merge_method.clone(),
            preset: self.preset.clone(),
            maximum_retries: self.maximum_retries.clone(),
        }
    }
}

//! Authentication for GitHub
//!
//! Supports an explicit token (the action input), environment variables and
//! the `gh` CLI.

use crate::error::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed explicitly (flag or action input)
    Input,
    /// Token from environment variable
    EnvVar,
    /// Token from CLI tool (gh)
    Cli,
}

/// Resolved GitHub credentials
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Bearer token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Pick a token from an explicit value or the environment, without running
/// any process. `lookup` abstracts `std::env::var` for tests.
pub fn resolve_token(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<GitHubAuthConfig> {
    if let Some(token) = non_empty(explicit.map(str::to_string)) {
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::Input,
        });
    }

    TOKEN_ENV_VARS.iter().find_map(|name| {
        non_empty(lookup(name)).map(|token| {
            debug!(var = name, "using token from environment");
            GitHubAuthConfig {
                token,
                source: AuthSource::EnvVar,
            }
        })
    })
}

/// Resolve GitHub credentials
///
/// Order: explicit token, `GITHUB_TOKEN`, `GH_TOKEN`, `gh auth token`.
pub async fn get_github_auth(explicit: Option<&str>) -> Result<GitHubAuthConfig> {
    if let Some(config) = resolve_token(explicit, |name| std::env::var(name).ok()) {
        return Ok(config);
    }

    debug!("no token in input or environment, trying gh CLI");
    let output = Command::new("gh").args(["auth", "token"]).output().await;
    match output {
        Ok(out) if out.status.success() => {
            let token = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if !token.is_empty() {
                return Ok(GitHubAuthConfig {
                    token,
                    source: AuthSource::Cli,
                });
            }
        }
        Ok(out) => debug!(status = %out.status, "gh auth token failed"),
        Err(e) => debug!(error = %e, "gh CLI not available"),
    }

    Err(Error::Auth(
        "no GitHub token found. Set the GITHUB_TOKEN input or environment variable, or run 'gh auth login'."
            .to_string(),
    ))
}

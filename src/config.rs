//! Action inputs and their validation
//!
//! GitHub Actions passes every declared input as a string, and an unset
//! input as the empty string, so inputs are taken raw and validated here.

use crate::error::{Error, Result};
use crate::merge::{MergeCriteria, RetryPolicy};
use crate::preset::Preset;
use crate::types::MergeMethod;

/// Login merged by default
pub const DEFAULT_GITHUB_LOGIN: &str = "dependabot[bot]";

/// Raw inputs as received from the workflow
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    /// `GITHUB_LOGIN`: author whose PRs get merged
    pub github_login: Option<String>,
    /// `MERGE_METHOD`: FAST_FORWARD, MERGE, REBASE or SQUASH
    pub merge_method: Option<String>,
    /// `PRESET`: DEPENDABOT_MINOR or DEPENDABOT_PATCH
    pub preset: Option<String>,
    /// `MAXIMUM_RETRIES`: retries after the first merge attempt
    pub maximum_retries: Option<String>,
}

/// Validated configuration for one invocation
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Gate applied to the fetched PR
    pub criteria: MergeCriteria,
    /// Backoff for the merge mutation
    pub retry: RetryPolicy,
}

/// Treat `None` and blank strings alike
fn provided(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl ActionConfig {
    /// Validate raw inputs, applying defaults for unset ones
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self> {
        let bot_login = provided(inputs.github_login.as_ref())
            .unwrap_or(DEFAULT_GITHUB_LOGIN)
            .to_string();

        let merge_method = provided(inputs.merge_method.as_ref())
            .map(str::parse::<MergeMethod>)
            .transpose()?
            .unwrap_or_default();

        let preset = provided(inputs.preset.as_ref())
            .map(str::parse::<Preset>)
            .transpose()?;

        let retry = match provided(inputs.maximum_retries.as_ref()) {
            Some(raw) => {
                let max_retries = raw.parse::<u32>().map_err(|e| {
                    Error::Config(format!(
                        "MAXIMUM_RETRIES must be a non-negative integer, got '{raw}': {e}"
                    ))
                })?;
                RetryPolicy::with_max_retries(max_retries)
            }
            None => RetryPolicy::default(),
        };

        Ok(Self {
            criteria: MergeCriteria {
                bot_login,
                merge_method,
                preset,
            },
            retry,
        })
    }
}

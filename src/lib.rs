//! pr-automerge: merge approved bot pull requests from CI
//!
//! Reacts to a single pull-request event, decides whether the pull request
//! is eligible for an automatic merge, and merges it through the GitHub
//! GraphQL API, retrying with exponential backoff when the base branch moved
//! underneath the merge.
//!
//! The work is split the same way for every invocation:
//! 1. Gather - fetch a [`types::PullRequestSnapshot`] (effectful)
//! 2. Plan - [`merge::evaluate`] the snapshot (pure, testable)
//! 3. Execute - [`merge::execute_merge`] with retries (effectful)

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod merge;
pub mod platform;
pub mod preset;
pub mod report;
pub mod types;

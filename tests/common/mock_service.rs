//! Mock pull request service for testing

use async_trait::async_trait;
use pr_automerge::error::{Error, Result};
use pr_automerge::platform::PullRequestService;
use pr_automerge::types::{MergeRequest, PullRequestRef, PullRequestSnapshot};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable fetch response
/// - Scripted merge results, consumed in order (success once exhausted)
/// - Call tracking for verification
/// - Error injection for the fetch path
#[derive(Default)]
pub struct MockPullRequestService {
    snapshot: Mutex<Option<PullRequestSnapshot>>,
    merge_results: Mutex<VecDeque<std::result::Result<(), String>>>,
    // Call tracking
    fetch_calls: Mutex<Vec<PullRequestRef>>,
    merge_calls: Mutex<Vec<MergeRequest>>,
    merge_call_times: Mutex<Vec<tokio::time::Instant>>,
    // Error injection
    error_on_fetch: Mutex<Option<String>>,
}

impl MockPullRequestService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose fetch returns `snapshot`
    pub fn with_snapshot(snapshot: PullRequestSnapshot) -> Self {
        let mock = Self::new();
        mock.set_snapshot(Some(snapshot));
        mock
    }

    // === Response configuration ===

    pub fn set_snapshot(&self, snapshot: Option<PullRequestSnapshot>) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    /// Queue a failed merge with `message`
    pub fn fail_merge(&self, message: &str) {
        self.merge_results
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// Queue `times` failed merges with `message`
    pub fn fail_merge_times(&self, message: &str, times: usize) {
        for _ in 0..times {
            self.fail_merge(message);
        }
    }

    /// Queue a successful merge
    pub fn succeed_merge(&self) {
        self.merge_results.lock().unwrap().push_back(Ok(()));
    }

    /// Make `fetch_pull_request` return an error
    pub fn fail_fetch(&self, message: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(message.to_string());
    }

    // === Call verification methods ===

    pub fn get_fetch_calls(&self) -> Vec<PullRequestRef> {
        self.fetch_calls.lock().unwrap().clone()
    }

    pub fn get_merge_calls(&self) -> Vec<MergeRequest> {
        self.merge_calls.lock().unwrap().clone()
    }

    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Instants at which merges were attempted (tokio clock)
    pub fn merge_call_times(&self) -> Vec<tokio::time::Instant> {
        self.merge_call_times.lock().unwrap().clone()
    }

    pub fn assert_merge_not_called(&self) {
        let calls = self.get_merge_calls();
        assert!(
            calls.is_empty(),
            "Expected merge_pull_request NOT to be called but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PullRequestService for MockPullRequestService {
    async fn fetch_pull_request(&self, pr: &PullRequestRef) -> Result<Option<PullRequestSnapshot>> {
        self.fetch_calls.lock().unwrap().push(pr.clone());

        if let Some(msg) = self.error_on_fetch.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn merge_pull_request(&self, request: &MergeRequest) -> Result<()> {
        self.merge_calls.lock().unwrap().push(request.clone());
        self.merge_call_times
            .lock()
            .unwrap()
            .push(tokio::time::Instant::now());

        match self.merge_results.lock().unwrap().pop_front() {
            Some(Err(msg)) => Err(Error::Platform(msg)),
            Some(Ok(())) | None => Ok(()),
        }
    }
}

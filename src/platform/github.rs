//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PullRequestService;
use crate::types::{
    Mergeable, MergeRequest, PrState, PullRequestRef, PullRequestSnapshot, ReviewState,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Query for everything the merge decision needs about one PR
pub const PULL_REQUEST_QUERY: &str = r"
query PullRequestInformation($owner: String!, $repo: String!, $number: Int!) {
  repository(owner: $owner, name: $repo) {
    pullRequest(number: $number) {
      id
      state
      mergeable
      merged
      author { login }
      commits(last: 1) { edges { node { commit { message } } } }
      reviews(last: 1) { edges { node { state } } }
    }
  }
}
";

/// Mutation merging one PR
pub const MERGE_PULL_REQUEST_MUTATION: &str = r"
mutation MergePullRequest($pullRequestId: ID!, $commitHeadline: String!, $mergeMethod: PullRequestMergeMethod!) {
  mergePullRequest(input: { pullRequestId: $pullRequestId, commitHeadline: $commitHeadline, mergeMethod: $mergeMethod }) {
    clientMutationId
  }
}
";

/// Request body of the merge mutation for `request`
pub fn merge_pull_request_mutation(request: &MergeRequest) -> serde_json::Value {
    serde_json::json!({
        "query": MERGE_PULL_REQUEST_MUTATION,
        "variables": {
            "pullRequestId": request.pull_request_id,
            "commitHeadline": request.commit_headline,
            "mergeMethod": request.merge_method.as_graphql(),
        }
    })
}

// GraphQL response types

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct PullRequestQueryData {
    repository: Option<GraphQlRepository>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRepository {
    pull_request: Option<GraphQlPullRequest>,
}

#[derive(Deserialize)]
struct GraphQlPullRequest {
    id: String,
    state: PrState,
    mergeable: Mergeable,
    merged: bool,
    author: Option<GraphQlActor>,
    commits: Connection<CommitNode>,
    reviews: Option<Connection<ReviewNode>>,
}

#[derive(Deserialize)]
struct GraphQlActor {
    login: String,
}

#[derive(Deserialize)]
struct Connection<T> {
    edges: Vec<Edge<T>>,
}

#[derive(Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Deserialize)]
struct CommitNode {
    commit: GraphQlCommit,
}

#[derive(Deserialize)]
struct GraphQlCommit {
    message: String,
}

#[derive(Deserialize)]
struct ReviewNode {
    state: ReviewState,
}

impl GraphQlPullRequest {
    /// Convert to a snapshot; a PR without commits yields `None`
    fn into_snapshot(self) -> Option<PullRequestSnapshot> {
        let message = self.commits.edges.into_iter().last()?.node.commit.message;
        let commit_headline = message.lines().next().unwrap_or_default().to_string();
        let latest_review_state = self
            .reviews
            .and_then(|r| r.edges.into_iter().last())
            .map(|e| e.node.state);

        Some(PullRequestSnapshot {
            id: self.id,
            state: self.state,
            mergeable: self.mergeable,
            merged: self.merged,
            latest_review_state,
            commit_headline,
            author_login: self.author.map(|a| a.login),
        })
    }
}

fn join_errors(errors: Vec<GraphQlError>) -> String {
    errors
        .into_iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(", ")
}

/// GitHub service talking to the GraphQL endpoint
///
/// Raw `reqwest` calls rather than a typed client: the retry logic needs the
/// exact status and body text of a rejected merge.
pub struct GitHubService {
    http_client: Client,
    token: String,
    graphql_url: Url,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `graphql_url` is the full endpoint, e.g. `https://api.github.com/graphql`
    /// or `https://ghe.example.com/api/graphql`.
    pub fn new(token: &str, graphql_url: Url) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("pr-automerge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            token: token.to_string(),
            graphql_url,
        })
    }

    /// Endpoint this service posts to
    pub const fn graphql_url(&self) -> &Url {
        &self.graphql_url
    }

    /// POST a GraphQL payload, returning the status and raw body
    async fn post(&self, payload: &serde_json::Value) -> Result<(reqwest::StatusCode, String)> {
        let response = self
            .http_client
            .post(self.graphql_url.clone())
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<GraphQlResponse<T>> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl PullRequestService for GitHubService {
    async fn fetch_pull_request(&self, pr: &PullRequestRef) -> Result<Option<PullRequestSnapshot>> {
        debug!(%pr, "fetching pull request");

        let payload = serde_json::json!({
            "query": PULL_REQUEST_QUERY,
            "variables": {
                "owner": pr.owner,
                "repo": pr.repo,
                "number": pr.number,
            }
        });

        let (status, body) = self.post(&payload).await?;
        if !status.is_success() {
            return Err(Error::GitHubApi(format!(
                "pull request query failed ({status}): {body}"
            )));
        }

        let response: GraphQlResponse<PullRequestQueryData> = Self::parse(&body)?;
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Err(Error::GitHubApi(format!(
                "GraphQL error: {}",
                join_errors(errors)
            )));
        }

        let snapshot = response
            .data
            .and_then(|d| d.repository)
            .and_then(|r| r.pull_request)
            .and_then(GraphQlPullRequest::into_snapshot);

        match &snapshot {
            Some(s) => debug!(
                %pr,
                state = %s.state,
                merged = s.merged,
                review = ?s.latest_review_state,
                "fetched pull request"
            ),
            None => debug!(%pr, "pull request query returned no data"),
        }
        Ok(snapshot)
    }

    async fn merge_pull_request(&self, request: &MergeRequest) -> Result<()> {
        debug!(
            pull_request_id = %request.pull_request_id,
            method = %request.merge_method,
            "merging pull request"
        );

        let (status, body) = self.post(&merge_pull_request_mutation(request)).await?;
        if !status.is_success() {
            return Err(Error::GitHubApi(format!("merge failed ({status}): {body}")));
        }

        // GitHub reports rejected mutations as 200 with an `errors` array.
        if !body.trim().is_empty() {
            match Self::parse::<serde_json::Value>(&body) {
                Ok(GraphQlResponse {
                    errors: Some(errors),
                    ..
                }) if !errors.is_empty() => {
                    return Err(Error::GitHubApi(format!(
                        "merge failed: {}",
                        join_errors(errors)
                    )));
                }
                Ok(_) => {}
                Err(e) => debug!(error = %e, "ignoring unparseable merge response body"),
            }
        }

        debug!(pull_request_id = %request.pull_request_id, "merge complete");
        Ok(())
    }
}

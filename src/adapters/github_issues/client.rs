//! GitHub HTTP client.
//!
//! Wraps the four GitHub REST API v3 calls the stale sweep needs. Requests
//! are never retried: a failed call is reported to the caller, which aborts
//! the run. Rate limits are respected through the engine's operation
//! budget rather than here.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::domain::errors::{DomainError, DomainResult};

use super::models::{
    GitHubAddLabelsRequest, GitHubCommentRequest, GitHubIssue, GitHubIssueUpdateRequest,
};

/// Base URL for the public GitHub REST API v3.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Configuration for [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Personal access token or workflow `GITHUB_TOKEN`.
    pub token: String,
    /// API base URL; points at a mock server in tests or at a GHES instance.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: GITHUB_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`DomainResult`] and map HTTP / network errors
/// to [`DomainError::ExecutionFailed`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the public API with default settings.
    pub fn new(token: String) -> DomainResult<Self> {
        Self::with_config(GitHubClientConfig {
            token,
            ..Default::default()
        })
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: GitHubClientConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::ExecutionFailed(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            token: config.token,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build an authorized request against `path` (relative to the base URL).
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "stalebot")
    }

    /// Send a request, turning transport failures and non-2xx statuses
    /// into `ExecutionFailed` errors tagged with `op`.
    async fn send(op: &str, req: RequestBuilder) -> DomainResult<Response> {
        let resp = req.send().await.map_err(|e| {
            DomainError::ExecutionFailed(format!("GitHub {op} request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "GitHub {op} returned {status}: {body}"
            )));
        }

        Ok(resp)
    }

    async fn parse<T: DeserializeOwned>(op: &str, resp: Response) -> DomainResult<T> {
        resp.json::<T>().await.map_err(|e| {
            DomainError::SerializationError(format!("GitHub {op} parse failed: {e}"))
        })
    }

    /// List one page of open issues and pull requests.
    ///
    /// `labels` is GitHub's comma-separated label filter; an item must carry
    /// every listed label to be returned.
    pub async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
        labels: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> DomainResult<Vec<GitHubIssue>> {
        let mut query = vec![
            ("state", "open".to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(labels) = labels {
            query.push(("labels", labels.to_string()));
        }

        let req = self
            .request(Method::GET, &format!("/repos/{owner}/{repo}/issues"))
            .query(&query);

        let resp = Self::send("list_issues", req).await?;
        Self::parse("list_issues", resp).await
    }

    /// Post a comment on an issue or pull request.
    pub async fn post_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        comment: &str,
    ) -> DomainResult<()> {
        let body = GitHubCommentRequest {
            body: comment.to_string(),
        };
        let req = self
            .request(
                Method::POST,
                &format!("/repos/{owner}/{repo}/issues/{issue_number}/comments"),
            )
            .json(&body);

        Self::send("post_comment", req).await?;
        Ok(())
    }

    /// Add labels to an issue or pull request. Labels already present are kept.
    pub async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[&str],
    ) -> DomainResult<()> {
        let body = GitHubAddLabelsRequest {
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
        };
        let req = self
            .request(
                Method::POST,
                &format!("/repos/{owner}/{repo}/issues/{issue_number}/labels"),
            )
            .json(&body);

        Self::send("add_labels", req).await?;
        Ok(())
    }

    /// Update the state of an issue (`"open"` or `"closed"`).
    pub async fn update_issue_state(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        state: &str,
    ) -> DomainResult<()> {
        let body = GitHubIssueUpdateRequest {
            state: state.to_string(),
        };
        let req = self
            .request(
                Method::PATCH,
                &format!("/repos/{owner}/{repo}/issues/{issue_number}"),
            )
            .json(&body);

        Self::send("update_issue_state", req).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_uses_public_api() {
        let client = GitHubClient::new("ghp_test_token".to_string()).unwrap();
        assert_eq!(client.token, "ghp_test_token");
        assert_eq!(client.base_url, GITHUB_API_BASE);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GitHubClient::with_config(GitHubClientConfig {
            token: "t".to_string(),
            base_url: "https://ghe.example.com/api/v3/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
    }
}

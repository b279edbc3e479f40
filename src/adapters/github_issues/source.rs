//! [`IssueSource`] backed by a GitHub repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Item;
use crate::domain::ports::IssueSource;

use super::client::GitHubClient;

/// Issue source for a single `owner/repo`.
#[derive(Debug, Clone)]
pub struct GitHubIssueSource {
    client: Arc<GitHubClient>,
    owner: String,
    repo: String,
}

impl GitHubIssueSource {
    pub fn new(client: Arc<GitHubClient>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

#[async_trait]
impl IssueSource for GitHubIssueSource {
    async fn list_open_items(
        &self,
        only_labels: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> DomainResult<Vec<Item>> {
        tracing::debug!(
            owner = %self.owner,
            repo = %self.repo,
            page,
            only_labels = ?only_labels,
            "Fetching open items"
        );

        self.client
            .list_open_issues(&self.owner, &self.repo, only_labels, page, per_page)
            .await?
            .into_iter()
            .map(|issue| issue.into_item())
            .collect()
    }

    async fn add_comment(&self, number: u64, body: &str) -> DomainResult<()> {
        tracing::info!(
            owner = %self.owner,
            repo = %self.repo,
            issue = number,
            body_len = body.len(),
            "GitHub Issues: posting comment"
        );
        self.client
            .post_comment(&self.owner, &self.repo, number, body)
            .await
    }

    async fn add_label(&self, number: u64, label: &str) -> DomainResult<()> {
        tracing::info!(
            owner = %self.owner,
            repo = %self.repo,
            issue = number,
            label,
            "GitHub Issues: adding label"
        );
        self.client
            .add_labels(&self.owner, &self.repo, number, &[label])
            .await
    }

    async fn close_item(&self, number: u64) -> DomainResult<()> {
        tracing::info!(
            owner = %self.owner,
            repo = %self.repo,
            issue = number,
            "GitHub Issues: closing"
        );
        self.client
            .update_issue_state(&self.owner, &self.repo, number, "closed")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        let client = Arc::new(GitHubClient::new("token".to_string()).unwrap());
        let source = GitHubIssueSource::new(client, "octo", "widgets");
        assert_eq!(source.slug(), "octo/widgets");
    }
}

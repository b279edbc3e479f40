//! GitHub Issues API response and request models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads used by the
//! stale sweep. They stay inside the adapter; the engine only sees
//! [`Item`](crate::domain::models::Item).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Item, ItemKind};

/// An issue returned by the GitHub API.
///
/// Issues and pull requests share the same endpoint. Pull requests carry a
/// non-null `pull_request` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    pub title: String,
    /// Labels applied to the issue.
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    /// Present when this item is actually a pull request.
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: String,
}

impl GitHubIssue {
    /// Convert to a domain [`Item`].
    ///
    /// Fails with `SerializationError` when `updated_at` is not a valid
    /// RFC 3339 timestamp.
    pub fn into_item(self) -> DomainResult<Item> {
        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)?.with_timezone(&Utc);
        Ok(Item {
            number: self.number,
            title: self.title,
            kind: ItemKind::from_pull_request_ref(self.pull_request.is_some()),
            updated_at,
            labels: self.labels.into_iter().map(|l| l.name).collect(),
        })
    }
}

/// A label applied to a GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabel {
    /// The label name (e.g., "bug", "Stale").
    pub name: String,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    /// API URL of the pull request resource.
    pub url: String,
}

/// Request body for posting a comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCommentRequest {
    pub body: String,
}

/// Request body for adding labels to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubAddLabelsRequest {
    pub labels: Vec<String>,
}

/// Request body for updating (patching) an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssueUpdateRequest {
    /// New state: "open" or "closed".
    pub state: String,
}

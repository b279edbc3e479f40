//! GitHub Issues adapter.
//!
//! Implements the [`IssueSource`](crate::domain::ports::IssueSource) port
//! against the GitHub REST API: paginated listing of open issues and pull
//! requests, comments, labels and closing.

pub mod client;
pub mod models;
pub mod source;

pub use client::{GitHubClient, GitHubClientConfig, GITHUB_API_BASE};
pub use source::GitHubIssueSource;

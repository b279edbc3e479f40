//! Issue source port.
//!
//! The engine reaches the issue tracker exclusively through this trait. The
//! GitHub REST implementation lives in `adapters::github_issues`; tests use
//! in-memory fakes.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Item;

/// Number of items requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Paginated read access to open items plus the three mutations the
/// staleness policy needs.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch one page of open issues and pull requests.
    ///
    /// Pages are 1-based. An empty vector means there are no more items.
    /// When `only_labels` is set, only items carrying those labels are
    /// returned.
    async fn list_open_items(
        &self,
        only_labels: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> DomainResult<Vec<Item>>;

    /// Post a comment on an item.
    async fn add_comment(&self, number: u64, body: &str) -> DomainResult<()>;

    /// Attach a label. Must succeed if the label is already present.
    async fn add_label(&self, number: u64, label: &str) -> DomainResult<()>;

    /// Transition an item to the closed state.
    async fn close_item(&self, number: u64) -> DomainResult<()>;
}

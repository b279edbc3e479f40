//! Common test utilities for integration tests
//!
//! Provides an in-memory issue source that records every call, a decision
//! sink that keeps decisions for assertions, and item fixtures.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use stalebot::domain::models::{Decision, Item, ItemKind, KindPolicy, Policy};
use stalebot::{DecisionSink, DomainError, DomainResult, IssueSource};

/// One call made against [`FakeIssueSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List {
        only_labels: Option<String>,
        page: u32,
        per_page: u32,
    },
    Comment {
        number: u64,
        body: String,
    },
    Label {
        number: u64,
        label: String,
    },
    Close {
        number: u64,
    },
}

impl Call {
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::List { .. })
    }
}

/// Issue source serving fixed pages and recording every call.
#[derive(Default)]
pub struct FakeIssueSource {
    pages: Vec<Vec<Item>>,
    calls: Mutex<Vec<Call>>,
    fail_on_list_page: Option<u32>,
    fail_on_close: Option<u64>,
}

impl FakeIssueSource {
    pub fn with_pages(pages: Vec<Vec<Item>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    /// Make `list_open_items` fail for `page`.
    pub fn failing_list(mut self, page: u32) -> Self {
        self.fail_on_list_page = Some(page);
        self
    }

    /// Make `close_item` fail for item `number`.
    pub fn failing_close(mut self, number: u64) -> Self {
        self.fail_on_close = Some(number);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::List { page, .. } => Some(page),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueSource for FakeIssueSource {
    async fn list_open_items(
        &self,
        only_labels: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> DomainResult<Vec<Item>> {
        self.push(Call::List {
            only_labels: only_labels.map(str::to_string),
            page,
            per_page,
        });
        if self.fail_on_list_page == Some(page) {
            return Err(DomainError::ExecutionFailed(
                "GitHub list_issues returned 401 Unauthorized: Bad credentials".to_string(),
            ));
        }
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_comment(&self, number: u64, body: &str) -> DomainResult<()> {
        self.push(Call::Comment {
            number,
            body: body.to_string(),
        });
        Ok(())
    }

    async fn add_label(&self, number: u64, label: &str) -> DomainResult<()> {
        self.push(Call::Label {
            number,
            label: label.to_string(),
        });
        Ok(())
    }

    async fn close_item(&self, number: u64) -> DomainResult<()> {
        if self.fail_on_close == Some(number) {
            return Err(DomainError::ExecutionFailed(format!(
                "GitHub update_issue_state returned 502 Bad Gateway for #{number}"
            )));
        }
        self.push(Call::Close { number });
        Ok(())
    }
}

/// Decision sink that keeps everything it is given.
#[derive(Default)]
pub struct RecordingSink {
    decisions: Mutex<Vec<(Decision, bool)>>,
}

impl RecordingSink {
    pub fn decisions(&self) -> Vec<Decision> {
        self.decisions
            .lock()
            .unwrap()
            .iter()
            .map(|(d, _)| d.clone())
            .collect()
    }

    pub fn dry_run_flags(&self) -> Vec<bool> {
        self.decisions.lock().unwrap().iter().map(|(_, f)| *f).collect()
    }
}

impl DecisionSink for RecordingSink {
    fn record(&self, decision: &Decision, dry_run: bool) {
        self.decisions
            .lock()
            .unwrap()
            .push((decision.clone(), dry_run));
    }
}

/// Fixed "now" shared by fixtures and the engine clock.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 15, 30, 0).unwrap()
}

pub fn issue(number: u64, days_inactive: i64) -> Item {
    Item::new(
        number,
        format!("Issue {number}"),
        ItemKind::Issue,
        now() - Duration::days(days_inactive),
    )
}

pub fn pull_request(number: u64, days_inactive: i64) -> Item {
    Item::new(
        number,
        format!("PR {number}"),
        ItemKind::PullRequest,
        now() - Duration::days(days_inactive),
    )
}

/// Policy with both kinds enabled: stale after 7 days, close after 5.
pub fn policy() -> Policy {
    Policy {
        issue: KindPolicy::new("This issue is stale", "stale").with_exempt_label("pinned"),
        pull_request: KindPolicy::new("This PR is stale", "stale-pr")
            .with_exempt_label("work-in-progress"),
        days_before_stale: 7,
        days_before_close: 5,
        ..Default::default()
    }
}

//! The immutable staleness policy consumed by the engine.
//!
//! A [`Policy`] is built once per run from the loaded configuration and is
//! never modified afterwards, so every decision the engine makes is a
//! function of the policy, the fetched items and the current time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::ItemKind;

/// Per-kind settings: one set for issues, one for pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindPolicy {
    /// Comment posted when marking stale. Empty disables this kind entirely.
    pub stale_message: String,
    pub stale_label: String,
    /// Label that exempts an item from any action. `None` exempts nothing.
    pub exempt_label: Option<String>,
}

impl KindPolicy {
    pub fn new(stale_message: impl Into<String>, stale_label: impl Into<String>) -> Self {
        Self {
            stale_message: stale_message.into(),
            stale_label: stale_label.into(),
            exempt_label: None,
        }
    }

    /// Builder: set the exempt label. An empty name clears it.
    #[must_use]
    pub fn with_exempt_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.exempt_label = if label.is_empty() { None } else { Some(label) };
        self
    }

    /// A kind with an empty stale message is never processed.
    pub fn is_enabled(&self) -> bool {
        !self.stale_message.is_empty()
    }
}

/// Where the engine takes "now" from when measuring inactivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "at")]
pub enum TimeSource {
    /// Wall-clock time, read from the engine's clock for every item.
    #[default]
    WallClock,
    /// A fixed reference instant, such as the author date of a commit.
    Reference(DateTime<Utc>),
}

/// Complete staleness policy for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub issue: KindPolicy,
    pub pull_request: KindPolicy,
    pub days_before_stale: i64,
    /// Negative disables the close path.
    pub days_before_close: i64,
    /// Label filter passed to every page fetch.
    pub only_labels: Option<String>,
    /// Initial operation budget.
    pub operations_per_run: i64,
    /// Skip mutating calls while still charging the budget.
    pub debug_only: bool,
    pub time_source: TimeSource,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            issue: KindPolicy::new("", "Stale"),
            pull_request: KindPolicy::new("", "Stale"),
            days_before_stale: 60,
            days_before_close: 7,
            only_labels: None,
            operations_per_run: 100,
            debug_only: false,
            time_source: TimeSource::WallClock,
        }
    }
}

impl Policy {
    /// Settings that apply to items of `kind`.
    pub const fn for_kind(&self, kind: ItemKind) -> &KindPolicy {
        match kind {
            ItemKind::Issue => &self.issue,
            ItemKind::PullRequest => &self.pull_request,
        }
    }

    pub const fn close_enabled(&self) -> bool {
        self.days_before_close >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind_selects_settings() {
        let policy = Policy {
            issue: KindPolicy::new("issue msg", "stale-issue"),
            pull_request: KindPolicy::new("pr msg", "stale-pr").with_exempt_label("keep"),
            ..Default::default()
        };
        assert_eq!(policy.for_kind(ItemKind::Issue).stale_label, "stale-issue");
        assert_eq!(policy.for_kind(ItemKind::PullRequest).stale_label, "stale-pr");
        assert_eq!(
            policy.for_kind(ItemKind::PullRequest).exempt_label.as_deref(),
            Some("keep")
        );
        assert!(policy.for_kind(ItemKind::Issue).exempt_label.is_none());
    }

    #[test]
    fn test_empty_exempt_label_is_none() {
        let kind = KindPolicy::new("msg", "Stale").with_exempt_label("");
        assert!(kind.exempt_label.is_none());
    }

    #[test]
    fn test_empty_message_disables_kind() {
        assert!(!KindPolicy::new("", "Stale").is_enabled());
        assert!(KindPolicy::new("stale!", "Stale").is_enabled());
    }

    #[test]
    fn test_close_enabled() {
        let mut policy = Policy::default();
        assert!(policy.close_enabled());
        policy.days_before_close = 0;
        assert!(policy.close_enabled());
        policy.days_before_close = -1;
        assert!(!policy.close_enabled());
    }
}

//! Per-item staleness decisions.
//!
//! [`decide`] is the pure classification step of the engine: given an item,
//! the policy and the instant to measure against, it returns the action to
//! take without touching the tracker or the budget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::{Item, ItemKind};
use super::policy::Policy;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Why an item was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The stale message for this kind is empty.
    KindDisabled,
    /// The item carries the exempt label.
    Exempt,
    /// Unlabeled, and either closing is disabled or it was updated recently.
    NotInactiveLongEnough,
    /// Already stale-labeled but updated within `days_before_stale`.
    RecentlyUpdated,
}

/// What the engine does with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "reason")]
pub enum Action {
    Skip(SkipReason),
    /// Post the stale comment and (re-)apply the stale label.
    MarkStale,
    Close,
}

impl Action {
    /// Budget units consumed when the action is carried out.
    pub const fn cost(&self) -> i64 {
        match self {
            Self::Skip(_) => 0,
            Self::MarkStale => 2,
            Self::Close => 1,
        }
    }

    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Skip(_))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skip(_) => "skip",
            Self::MarkStale => "mark_stale",
            Self::Close => "close",
        }
    }
}

/// The outcome of classifying one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub number: u64,
    pub title: String,
    pub kind: ItemKind,
    pub updated_at: DateTime<Utc>,
    pub action: Action,
}

/// Returns `true` if at least `days` whole days elapsed between
/// `updated_at` and `now`. The boundary is inclusive.
pub fn inactive_for_at_least(updated_at: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    let elapsed = (now - updated_at).num_milliseconds();
    elapsed >= days.saturating_mul(MILLIS_PER_DAY)
}

/// Classify `item` under `policy`, measuring inactivity up to `now`.
pub fn decide(item: &Item, policy: &Policy, now: DateTime<Utc>) -> Decision {
    Decision {
        number: item.number,
        title: item.title.clone(),
        kind: item.kind,
        updated_at: item.updated_at,
        action: classify(item, policy, now),
    }
}

fn classify(item: &Item, policy: &Policy, now: DateTime<Utc>) -> Action {
    let settings = policy.for_kind(item.kind);

    if !settings.is_enabled() {
        return Action::Skip(SkipReason::KindDisabled);
    }

    if settings
        .exempt_label
        .as_deref()
        .is_some_and(|label| item.has_label(label))
    {
        return Action::Skip(SkipReason::Exempt);
    }

    if !item.has_label(&settings.stale_label) {
        if policy.close_enabled()
            && inactive_for_at_least(item.updated_at, now, policy.days_before_close)
        {
            Action::Close
        } else {
            Action::Skip(SkipReason::NotInactiveLongEnough)
        }
    } else if inactive_for_at_least(item.updated_at, now, policy.days_before_stale) {
        Action::MarkStale
    } else {
        Action::Skip(SkipReason::RecentlyUpdated)
    }
}

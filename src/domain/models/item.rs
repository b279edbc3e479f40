//! Issue and pull request snapshots.
//!
//! An [`Item`] is an immutable view of one open issue or pull request as
//! returned by the tracker at the start of a page fetch. Nothing in the
//! engine mutates it; actions are sent back to the tracker by number.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Whether an item is a plain issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Issue,
    PullRequest,
}

impl ItemKind {
    /// Derive the kind from the presence of a pull-request back-reference.
    pub const fn from_pull_request_ref(has_ref: bool) -> Self {
        if has_ref {
            Self::PullRequest
        } else {
            Self::Issue
        }
    }

    /// Short name used in log output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::PullRequest => "pr",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    /// Title, used for diagnostics only.
    pub title: String,
    pub kind: ItemKind,
    /// Last-activity timestamp reported by the tracker.
    pub updated_at: DateTime<Utc>,
    /// Names of the labels currently applied.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Item {
    /// Create an unlabeled item.
    pub fn new(
        number: u64,
        title: impl Into<String>,
        kind: ItemKind,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            kind,
            updated_at,
            labels: Vec::new(),
        }
    }

    /// Builder: add a label.
    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.labels.push(name.into());
        self
    }

    /// Returns `true` if any applied label matches `label`.
    ///
    /// See [`labels_match`] for the comparison rules.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|name| labels_match(name, label))
    }
}

/// Compare two label names the way the tracker's UI treats them.
///
/// Letter case is ignored ("Stale" == "STALE") but accents are significant
/// ("stalé" != "stale"). Canonically equivalent spellings compare equal, so
/// a precomposed "é" matches "e" followed by a combining acute accent.
///
/// Case is folded by mapping to uppercase and back to lowercase, which
/// expands letters with multi-character case forms: "straße" matches
/// "STRASSE" and the "ﬁ" ligature matches "FI".
pub fn labels_match(a: &str, b: &str) -> bool {
    fold(a).eq(fold(b))
}

fn fold(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .nfc()
}

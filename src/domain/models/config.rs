use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for stalebot
///
/// Field names mirror the workflow inputs with `-` replaced by `_`
/// (`repo-token` becomes `repo_token`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Token used to authenticate against the tracker API (required)
    #[serde(default)]
    pub repo_token: String,

    /// Target repository as `owner/repo`
    #[serde(default)]
    pub repository: String,

    /// Base URL of the tracker REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout for tracker calls, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Comment posted on stale issues; empty disables issue processing
    #[serde(default)]
    pub stale_issue_message: String,

    /// Comment posted on stale pull requests; empty disables PR processing
    #[serde(default)]
    pub stale_pr_message: String,

    /// Inactivity, in days, before a stale-labeled item is re-notified
    #[serde(default = "default_days_before_stale")]
    pub days_before_stale: i64,

    /// Inactivity, in days, before an unlabeled item is closed; negative disables closing
    #[serde(default = "default_days_before_close")]
    pub days_before_close: i64,

    #[serde(default = "default_stale_label")]
    pub stale_issue_label: String,

    #[serde(default)]
    pub exempt_issue_label: String,

    #[serde(default = "default_stale_label")]
    pub stale_pr_label: String,

    #[serde(default)]
    pub exempt_pr_label: String,

    /// Comma-separated labels; only items carrying them are fetched
    #[serde(default)]
    pub only_labels: String,

    /// Ceiling on mutating API calls per run
    #[serde(default = "default_operations_per_run")]
    pub operations_per_run: i64,

    /// Run the full decision logic without mutating anything
    #[serde(default)]
    pub debug_only: bool,

    /// Which clock item activity is measured against
    #[serde(default)]
    pub staleness_mode: StalenessMode,

    /// Commit payload (`{"author": {"date": ...}}`) used by `commit_date` mode
    #[serde(default)]
    pub commit_json: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How "now" is determined when measuring inactivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalenessMode {
    /// Compare against wall-clock time.
    #[default]
    Inactivity,
    /// Compare against the author date of `commit_json`.
    #[serde(alias = "commit-date")]
    CommitDate,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_days_before_stale() -> i64 {
    60
}

const fn default_days_before_close() -> i64 {
    7
}

fn default_stale_label() -> String {
    "Stale".to_string()
}

const fn default_operations_per_run() -> i64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_token: String::new(),
            repository: String::new(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            stale_issue_message: String::new(),
            stale_pr_message: String::new(),
            days_before_stale: default_days_before_stale(),
            days_before_close: default_days_before_close(),
            stale_issue_label: default_stale_label(),
            exempt_issue_label: String::new(),
            stale_pr_label: default_stale_label(),
            exempt_pr_label: String::new(),
            only_labels: String::new(),
            operations_per_run: default_operations_per_run(),
            debug_only: false,
            staleness_mode: StalenessMode::default(),
            commit_json: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Split `repository` into `(owner, repo)`.
    ///
    /// Returns `None` unless the value has exactly one `/` with non-empty
    /// text on both sides.
    pub fn owner_and_repo(&self) -> Option<(&str, &str)> {
        let (owner, repo) = self.repository.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some((owner, repo))
    }

    /// Copy of this config that is safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.repo_token.is_empty() {
            copy.repo_token = "***".to_string();
        }
        copy
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a JSON log file (optional, stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::value::{Dict, Value};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::config::{Config, StalenessMode};
use crate::domain::models::{KindPolicy, Policy, TimeSource};

/// Default project config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".github/stalebot.yaml";

/// Prefix GitHub Actions uses when exposing workflow inputs as env vars.
const ACTION_INPUT_PREFIX: &str = "INPUT_";

/// Workflow inputs parsed as numbers or booleans. Every other input is
/// kept as the literal string the workflow supplied.
const TYPED_ACTION_INPUTS: [&str; 5] = [
    "days_before_stale",
    "days_before_close",
    "operations_per_run",
    "debug_only",
    "request_timeout_secs",
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required input: repo_token")]
    MissingRepoToken,

    #[error("Invalid repository: '{0}'. Must be in 'owner/repo' form")]
    InvalidRepository(String),

    #[error("Invalid days_before_stale: {0}. Must not be negative")]
    InvalidDaysBeforeStale(i64),

    #[error("Invalid operations_per_run: {0}. Must be at least 1")]
    InvalidOperationsPerRun(i64),

    #[error("Invalid request_timeout_secs: {0}. Must be at least 1")]
    InvalidRequestTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("staleness_mode 'commit_date' requires commit_json")]
    MissingCommitJson,

    #[error("Invalid commit_json: {0}")]
    InvalidCommitJson(String),
}

/// Command-line overrides, merged with the highest precedence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_per_run: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_only: Option<bool>,
}

#[derive(Deserialize)]
struct CommitPayload {
    author: CommitAuthor,
}

#[derive(Deserialize)]
struct CommitAuthor {
    date: String,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Workflow context (`GITHUB_REPOSITORY`, `GITHUB_API_URL`, `GITHUB_TOKEN`)
    /// 3. Config file (`path`, or .github/stalebot.yaml when `None`)
    /// 4. Environment variables (STALEBOT_* prefix, `__` for nesting)
    /// 5. Workflow inputs (INPUT_* as set by GitHub Actions)
    /// 6. Command-line overrides
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Serialized::defaults(workflow_context()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("STALEBOT_").split("__"))
            .merge(Serialized::defaults(action_inputs()))
            .merge(Serialized::defaults(overrides))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.repo_token.trim().is_empty() {
            return Err(ConfigError::MissingRepoToken);
        }

        if config.owner_and_repo().is_none() {
            return Err(ConfigError::InvalidRepository(config.repository.clone()));
        }

        if config.days_before_stale < 0 {
            return Err(ConfigError::InvalidDaysBeforeStale(config.days_before_stale));
        }

        if config.operations_per_run < 1 {
            return Err(ConfigError::InvalidOperationsPerRun(
                config.operations_per_run,
            ));
        }

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidRequestTimeout(
                config.request_timeout_secs,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.staleness_mode == StalenessMode::CommitDate {
            let json = config
                .commit_json
                .as_deref()
                .ok_or(ConfigError::MissingCommitJson)?;
            parse_commit_date(json)?;
        }

        Ok(())
    }

    /// Build the immutable engine policy from a validated config.
    pub fn build_policy(config: &Config) -> Result<Policy, ConfigError> {
        let time_source = match config.staleness_mode {
            StalenessMode::Inactivity => TimeSource::WallClock,
            StalenessMode::CommitDate => {
                let json = config
                    .commit_json
                    .as_deref()
                    .ok_or(ConfigError::MissingCommitJson)?;
                TimeSource::Reference(parse_commit_date(json)?)
            }
        };

        let only_labels = Some(config.only_labels.trim())
            .filter(|labels| !labels.is_empty())
            .map(str::to_string);

        Ok(Policy {
            issue: KindPolicy::new(&config.stale_issue_message, &config.stale_issue_label)
                .with_exempt_label(&config.exempt_issue_label),
            pull_request: KindPolicy::new(&config.stale_pr_message, &config.stale_pr_label)
                .with_exempt_label(&config.exempt_pr_label),
            days_before_stale: config.days_before_stale,
            days_before_close: config.days_before_close,
            only_labels,
            operations_per_run: config.operations_per_run,
            debug_only: config.debug_only,
            time_source,
        })
    }
}

/// Extract `author.date` from a commit payload.
pub fn parse_commit_date(json: &str) -> Result<DateTime<Utc>, ConfigError> {
    let payload: CommitPayload =
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidCommitJson(e.to_string()))?;
    DateTime::parse_from_rfc3339(&payload.author.date)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            ConfigError::InvalidCommitJson(format!(
                "author.date '{}' is not RFC 3339: {e}",
                payload.author.date
            ))
        })
}

/// Values GitHub Actions exposes about the current workflow run.
fn workflow_context() -> Dict {
    let mut dict = Dict::new();
    for (var, key) in [
        ("GITHUB_REPOSITORY", "repository"),
        ("GITHUB_API_URL", "api_url"),
        ("GITHUB_TOKEN", "repo_token"),
    ] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                dict.insert(key.to_string(), Value::from(value));
            }
        }
    }
    dict
}

/// Workflow inputs (`INPUT_REPO-TOKEN` → `repo_token`).
///
/// Actions sets every declared input, using an empty string for inputs the
/// workflow left out; those are dropped so the lower layers still apply.
fn action_inputs() -> Dict {
    std::env::vars()
        .filter_map(|(name, value)| {
            let key = name.strip_prefix(ACTION_INPUT_PREFIX)?;
            if value.trim().is_empty() {
                return None;
            }
            let key = key.to_lowercase().replace('-', "_");
            let value = if TYPED_ACTION_INPUTS.contains(&key.as_str()) {
                value.trim().parse::<Value>().unwrap_or_else(|_| Value::from(value))
            } else {
                Value::from(value)
            };
            Some((key, value))
        })
        .collect()
}

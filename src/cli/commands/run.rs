//! `stalebot run`: one stale sweep over the configured repository.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use crate::adapters::github_issues::{GitHubClient, GitHubClientConfig, GitHubIssueSource};
use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::{ConfigError, ConfigLoader, ConfigOverrides};
use crate::infrastructure::logging::{LoggerImpl, TracingDecisionSink};
use crate::services::{RunReport, StalenessEngine};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to a YAML config file (defaults to .github/stalebot.yaml)
    #[arg(short, long, env = "STALEBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository to sweep, as owner/repo
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Maximum number of mutating API calls for this run
    #[arg(long)]
    pub operations_per_run: Option<i64>,

    /// Log decisions without modifying any issue
    #[arg(long)]
    pub debug_only: bool,
}

impl RunArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repository: self.repository.clone(),
            operations_per_run: self.operations_per_run,
            debug_only: self.debug_only.then_some(true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub repository: String,
    #[serde(flatten)]
    pub report: RunReport,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let r = &self.report;
        let mut lines = vec![format!(
            "{} {}{}",
            style("Stale sweep finished for").bold(),
            style(&self.repository).cyan(),
            if r.dry_run {
                style(" (debug only, nothing modified)").yellow().to_string()
            } else {
                String::new()
            }
        )];
        lines.push(format!("  Pages fetched:    {}", r.pages_fetched));
        lines.push(format!("  Items examined:   {}", r.items_seen));
        lines.push(format!("  Marked stale:     {}", r.marked_stale));
        lines.push(format!("  Closed:           {}", r.closed));
        lines.push(format!("  Skipped:          {}", r.skipped));
        lines.push(format!("  Budget remaining: {}", r.remaining_budget));
        if r.budget_exhausted {
            lines.push(
                style("  Operation budget exhausted; remaining items wait for the next run")
                    .yellow()
                    .to_string(),
            );
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RunArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load(args.config.as_deref(), &args.overrides())?;
    let _logger = LoggerImpl::init(&config.logging).context("Failed to initialize logging")?;
    let policy = ConfigLoader::build_policy(&config)?;

    let (owner, repo) = config
        .owner_and_repo()
        .ok_or_else(|| ConfigError::InvalidRepository(config.repository.clone()))?;

    let client = GitHubClient::with_config(GitHubClientConfig {
        token: config.repo_token.clone(),
        base_url: config.api_url.clone(),
        timeout_secs: config.request_timeout_secs,
    })?;
    let source = Arc::new(GitHubIssueSource::new(Arc::new(client), owner, repo));
    let repository = source.slug();

    tracing::info!(repository = %repository, "Starting stale sweep");

    let engine = StalenessEngine::new(source, Arc::new(TracingDecisionSink), policy);
    let report = engine
        .run()
        .await
        .with_context(|| format!("Stale sweep of {repository} aborted"))?;

    output(&RunOutput { repository, report }, json_mode);
    Ok(())
}

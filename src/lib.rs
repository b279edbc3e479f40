//! Stalebot - stale issue and pull request triage
//!
//! Stalebot runs once per invocation (typically from a scheduled workflow),
//! walks every open issue and pull request of one repository and applies a
//! staleness policy: inactive items are closed, stale-labeled items that
//! stay inactive are re-notified, exempt items are left alone. A per-run
//! operation budget caps the number of mutating API calls.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): items, policy, decisions, budget, and ports
//! - **Service Layer** (`services`): the staleness engine
//! - **Adapters** (`adapters`): the GitHub REST issue source
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stalebot::adapters::github_issues::{GitHubClient, GitHubIssueSource};
//! use stalebot::infrastructure::logging::TracingDecisionSink;
//! use stalebot::{Policy, StalenessEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(GitHubClient::new(std::env::var("GITHUB_TOKEN")?)?);
//!     let source = Arc::new(GitHubIssueSource::new(client, "octo", "widgets"));
//!     let engine = StalenessEngine::new(source, Arc::new(TracingDecisionSink), Policy::default());
//!     let report = engine.run().await?;
//!     println!("{} operations left", report.remaining_budget);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    decide, Action, Config, Decision, Item, ItemKind, KindPolicy, OperationBudget, Policy,
    SkipReason, StalenessMode, TimeSource,
};
pub use domain::ports::{Clock, DecisionSink, FixedClock, IssueSource, SystemClock};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{RunReport, StalenessEngine};

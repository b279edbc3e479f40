//! Adapters for external systems.

pub mod github_issues;

//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable and workflow input overrides
//! - Configuration validation
//! - Conversion into the engine's immutable policy

pub mod loader;

pub use loader::{parse_commit_date, ConfigError, ConfigLoader, ConfigOverrides, DEFAULT_CONFIG_PATH};

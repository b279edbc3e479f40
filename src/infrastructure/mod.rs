//! Infrastructure layer module
//!
//! This module contains the ambient plumbing around the engine:
//! - Configuration management
//! - Logging infrastructure
//!
//! The GitHub client lives with the other external-system adapters in
//! `crate::adapters`.

pub mod config;
pub mod logging;

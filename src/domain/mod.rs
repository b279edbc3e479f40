//! Domain layer for stalebot
//!
//! This module contains the staleness decision logic, the operation budget,
//! and the ports the engine uses to reach the issue tracker.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};

//! Service layer for stalebot.

pub mod staleness_engine;

pub use staleness_engine::{RunReport, StalenessEngine};

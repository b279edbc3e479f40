//! Domain models for stalebot.

pub mod budget;
pub mod config;
pub mod decision;
pub mod item;
pub mod policy;

pub use budget::OperationBudget;
pub use config::{Config, LoggingConfig, StalenessMode};
pub use decision::{decide, inactive_for_at_least, Action, Decision, SkipReason, MILLIS_PER_DAY};
pub use item::{labels_match, Item, ItemKind};
pub use policy::{KindPolicy, Policy, TimeSource};

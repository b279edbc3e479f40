//! Domain ports (interfaces)
//!
//! These traits define the seams between the staleness engine and the
//! outside world: the issue tracker, the decision log and the clock.

pub mod clock;
pub mod decision_sink;
pub mod issue_source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decision_sink::DecisionSink;
pub use issue_source::{IssueSource, PAGE_SIZE};

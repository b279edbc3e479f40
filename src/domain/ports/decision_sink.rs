use crate::domain::models::Decision;

/// Receives every decision the engine makes, in processing order.
///
/// The sink is a side channel: it cannot influence what the engine does.
/// The production sink writes structured log events; tests record the
/// decisions and assert on them.
pub trait DecisionSink: Send + Sync {
    /// Called once per classified item, before any resulting mutation.
    fn record(&self, decision: &Decision, dry_run: bool);
}

use tracing::{debug, info};

use crate::domain::models::{Action, Decision};
use crate::domain::ports::DecisionSink;

/// Writes every decision as a structured `tracing` event.
///
/// Skips are logged at debug level; mutating actions at info level so a
/// default-level run shows exactly what changed (or would have changed in
/// debug-only mode).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDecisionSink;

impl DecisionSink for TracingDecisionSink {
    fn record(&self, decision: &Decision, dry_run: bool) {
        match decision.action {
            Action::Skip(reason) => debug!(
                number = decision.number,
                kind = %decision.kind,
                title = %decision.title,
                updated_at = %decision.updated_at,
                reason = ?reason,
                "Skipping item"
            ),
            action => info!(
                number = decision.number,
                kind = %decision.kind,
                title = %decision.title,
                updated_at = %decision.updated_at,
                action = action.as_str(),
                cost = action.cost(),
                dry_run,
                "Applying staleness action"
            ),
        }
    }
}

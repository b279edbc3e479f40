//! Per-run operation budget.

use serde::{Deserialize, Serialize};

/// Ceiling on mutating tracker calls for a single run.
///
/// Starts at the policy's `operations_per_run` and is charged the cost of
/// every mutating action the engine attempts. It is never replenished, and
/// the final charge may take it below zero (a mark-stale costing 2 with
/// only 1 unit left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationBudget {
    remaining: i64,
}

impl OperationBudget {
    pub const fn new(ceiling: i64) -> Self {
        Self { remaining: ceiling }
    }

    /// Deduct `cost` units and return what is left.
    pub fn charge(&mut self, cost: i64) -> i64 {
        self.remaining = self.remaining.saturating_sub(cost);
        self.remaining
    }

    pub const fn remaining(&self) -> i64 {
        self.remaining
    }

    pub const fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

//! Staleness engine: walks every open item page by page, classifies it and
//! carries out the resulting action while keeping within the operation
//! budget.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{decide, Action, Item, OperationBudget, Policy, TimeSource};
use crate::domain::ports::{Clock, DecisionSink, IssueSource, SystemClock, PAGE_SIZE};

/// Summary of one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Unused budget. Zero or negative when the run stopped on the budget.
    pub remaining_budget: i64,
    /// Pages requested from the source, including the final empty one.
    pub pages_fetched: u32,
    pub items_seen: usize,
    pub marked_stale: usize,
    pub closed: usize,
    pub skipped: usize,
    /// `true` when processing stopped because the budget ran out.
    pub budget_exhausted: bool,
    /// `true` when mutations were suppressed.
    pub dry_run: bool,
}

/// Applies a [`Policy`] to every open item exposed by an [`IssueSource`].
pub struct StalenessEngine<S: IssueSource> {
    source: Arc<S>,
    sink: Arc<dyn DecisionSink>,
    clock: Arc<dyn Clock>,
    policy: Policy,
}

impl<S: IssueSource> StalenessEngine<S> {
    pub fn new(source: Arc<S>, sink: Arc<dyn DecisionSink>, policy: Policy) -> Self {
        Self {
            source,
            sink,
            clock: Arc::new(SystemClock),
            policy,
        }
    }

    /// Replace the wall clock. Ignored when the policy uses a reference time.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Run the policy over the whole repository.
    ///
    /// Pages are fetched one at a time until an empty page comes back or
    /// the budget is spent. The first source error aborts the run; earlier
    /// mutations are not rolled back.
    #[instrument(skip(self), fields(budget = self.policy.operations_per_run, dry_run = self.policy.debug_only))]
    pub async fn run(&self) -> DomainResult<RunReport> {
        if self.policy.debug_only {
            warn!("Executing in debug mode; decisions will be logged but no items will be modified");
        }

        let mut budget = OperationBudget::new(self.policy.operations_per_run);
        let mut report = RunReport {
            dry_run: self.policy.debug_only,
            ..RunReport::default()
        };
        let mut page: u32 = 1;

        'pages: loop {
            if budget.is_exhausted() {
                warn!(remaining = budget.remaining(), "Operation budget exhausted before fetching; stopping");
                report.budget_exhausted = true;
                break;
            }

            let items = self
                .source
                .list_open_items(self.policy.only_labels.as_deref(), page, PAGE_SIZE)
                .await?;
            report.pages_fetched += 1;

            if items.is_empty() {
                debug!(page, "No more items found to process");
                break;
            }

            debug!(page, count = items.len(), "Processing page");

            for item in &items {
                report.items_seen += 1;
                let decision = decide(item, &self.policy, self.now());
                self.sink.record(&decision, self.policy.debug_only);

                match decision.action {
                    Action::Skip(_) => {
                        report.skipped += 1;
                        continue;
                    }
                    Action::MarkStale => {
                        self.mark_stale(item).await?;
                        report.marked_stale += 1;
                    }
                    Action::Close => {
                        self.close(item).await?;
                        report.closed += 1;
                    }
                }

                let remaining = budget.charge(decision.action.cost());
                if budget.is_exhausted() {
                    warn!(remaining, "Reached max number of operations to process; stopping");
                    report.budget_exhausted = true;
                    break 'pages;
                }
            }

            page += 1;
        }

        report.remaining_budget = budget.remaining();
        info!(
            remaining = report.remaining_budget,
            pages = report.pages_fetched,
            items = report.items_seen,
            marked_stale = report.marked_stale,
            closed = report.closed,
            "Staleness run finished"
        );
        Ok(report)
    }

    fn now(&self) -> DateTime<Utc> {
        match self.policy.time_source {
            TimeSource::WallClock => self.clock.now(),
            TimeSource::Reference(at) => at,
        }
    }

    async fn mark_stale(&self, item: &Item) -> DomainResult<()> {
        let settings = self.policy.for_kind(item.kind);
        debug!(number = item.number, title = %item.title, "Marking item stale");

        if self.policy.debug_only {
            return Ok(());
        }

        self.source
            .add_comment(item.number, &settings.stale_message)
            .await?;
        self.source
            .add_label(item.number, &settings.stale_label)
            .await
    }

    async fn close(&self, item: &Item) -> DomainResult<()> {
        debug!(number = item.number, title = %item.title, "Closing item for being stale");

        if self.policy.debug_only {
            return Ok(());
        }

        self.source.close_item(item.number).await
    }
}

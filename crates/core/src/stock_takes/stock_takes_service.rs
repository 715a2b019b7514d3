use log::debug;
use std::sync::Arc;

use crate::errors::Result;
use crate::stock_takes::StockTake;
use crate::valuation::{EvaluationSnapshot, SnapshotRepositoryTrait, ValuationServiceTrait};

/// Runs cost evaluations for every line of a stock take and persists the
/// resulting snapshots. Re-running a stock take replaces its previous
/// snapshots; it never edits them.
#[derive(Clone)]
pub struct StockTakeService {
    valuation_service: Arc<dyn ValuationServiceTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl StockTakeService {
    pub fn new(
        valuation_service: Arc<dyn ValuationServiceTrait>,
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    ) -> Self {
        Self {
            valuation_service,
            snapshot_repository,
        }
    }

    /// Evaluates every line of the stock take, replacing any snapshots from
    /// a previous run. The first fatal error aborts the run; incomplete
    /// invoice data does not, it only marks the affected snapshots.
    ///
    /// All lines are evaluated before the previous run's snapshots are
    /// deleted, so a failing line leaves the prior evaluations in place.
    pub async fn run_evaluations(&self, stock_take: &StockTake) -> Result<Vec<EvaluationSnapshot>> {
        debug!(
            "Running cost evaluations for stock take {} ({} lines)",
            stock_take.id,
            stock_take.lines.len()
        );

        let mut snapshots = Vec::with_capacity(stock_take.lines.len());
        for line in &stock_take.lines {
            let request = line.to_request(stock_take);
            let mut snapshot = self.valuation_service.evaluate(&request)?;
            snapshot.stock_take_id = Some(stock_take.id.clone());
            snapshot.stock_take_line_id = Some(line.id.clone());
            snapshots.push(snapshot);
        }

        self.snapshot_repository
            .delete_snapshots_for_stock_take(&stock_take.id)
            .await?;
        self.snapshot_repository.save_snapshots(&snapshots).await?;
        Ok(snapshots)
    }

    /// Number of snapshots currently recorded for a stock take.
    pub fn evaluation_count(&self, stock_take_id: &str) -> Result<usize> {
        Ok(self
            .snapshot_repository
            .snapshots_for_stock_take(stock_take_id)?
            .len())
    }
}

//! Service and repository traits for valuation snapshots.

use async_trait::async_trait;

use crate::errors::Result;
use crate::valuation::{EvaluationRequest, EvaluationSnapshot};

/// Trait defining the contract for evaluating one stock position.
pub trait ValuationServiceTrait: Send + Sync {
    /// Computes the average, FIFO and LIFO costs for the request and
    /// assembles them, with the product's catalog reference values, into one
    /// immutable snapshot.
    fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationSnapshot>;
}

/// Repository trait for persisting evaluation snapshots.
///
/// One snapshot is stored per evaluated inventory line; the repository also
/// exposes the aggregate list view per stock-taking event.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Save snapshots produced by one evaluation run.
    async fn save_snapshots(&self, snapshots: &[EvaluationSnapshot]) -> Result<()>;

    /// Delete all snapshots previously recorded for a stock take.
    async fn delete_snapshots_for_stock_take(&self, stock_take_id: &str) -> Result<()>;

    /// List the snapshots recorded for a stock take.
    fn snapshots_for_stock_take(&self, stock_take_id: &str) -> Result<Vec<EvaluationSnapshot>>;
}

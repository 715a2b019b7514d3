//! Query contract for the external movement ledger.

use crate::errors::Result;
use crate::movements::{MovementLine, MovementQueryMode};
use crate::valuation::EvaluationRequest;

/// Trait defining the read-only contract against the stock movement ledger.
///
/// Implementations must return only completed movements for the request's
/// product, lot and company with `movement_date <= cutoff_date`, ordered by
/// `(movement_date desc, id desc)`. In `Receipts` mode only external-to-
/// internal movements are returned; in `ReceiptsAndIssues` mode every
/// movement touching an internal location is.
pub trait MovementRepositoryTrait: Send + Sync {
    fn movement_lines(
        &self,
        request: &EvaluationRequest,
        mode: MovementQueryMode,
    ) -> Result<Vec<MovementLine>>;
}

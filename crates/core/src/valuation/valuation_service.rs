use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::catalog::{ProductCatalogTrait, ProductReference};
use crate::constants::INCOMPLETE_DATA_MESSAGE;
use crate::errors::Result;
use crate::movements::{MovementQueryMode, MovementRepositoryTrait};
use crate::utils::PrecisionSettings;
use crate::valuation::valuation_calculator::{average_cost, fifo_cost, lifo_cost};
use crate::valuation::{
    EvaluationRequest, EvaluationSnapshot, ValuationResult, ValuationServiceTrait,
};

/// Runs the three valuation algorithms for one stock position and assembles
/// the snapshot. Pure assembly on top of the reducers; no additional numeric
/// logic lives here.
#[derive(Clone)]
pub struct ValuationService {
    movement_repository: Arc<dyn MovementRepositoryTrait>,
    product_catalog: Arc<dyn ProductCatalogTrait>,
    precision: PrecisionSettings,
}

impl ValuationService {
    pub fn new(
        movement_repository: Arc<dyn MovementRepositoryTrait>,
        product_catalog: Arc<dyn ProductCatalogTrait>,
        precision: PrecisionSettings,
    ) -> Self {
        Self {
            movement_repository,
            product_catalog,
            precision,
        }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationSnapshot> {
        debug!(
            "Evaluating product {} at {} (qty {})",
            request.product_id, request.location_id, request.product_qty
        );

        // Average and FIFO consume receipts only; LIFO needs both directions
        // to reconstruct historical balances. Intentional asymmetry.
        let receipt_lines = self
            .movement_repository
            .movement_lines(request, MovementQueryMode::Receipts)?;
        let ledger_lines = self
            .movement_repository
            .movement_lines(request, MovementQueryMode::ReceiptsAndIssues)?;

        let average = average_cost(&receipt_lines, &self.precision);
        let fifo = fifo_cost(&receipt_lines, request.product_qty, &self.precision);
        let lifo = lifo_cost(&ledger_lines, request.product_qty, &self.precision);

        let reference = self.product_catalog.product_reference(&request.product_id)?;

        Ok(build_snapshot(request, &average, &fifo, &lifo, reference))
    }
}

fn build_snapshot(
    request: &EvaluationRequest,
    average: &ValuationResult,
    fifo: &ValuationResult,
    lifo: &ValuationResult,
    reference: ProductReference,
) -> EvaluationSnapshot {
    let name = if average.incomplete || fifo.incomplete || lifo.incomplete {
        INCOMPLETE_DATA_MESSAGE.to_string()
    } else {
        String::new()
    };

    let evaluation_date = request.cutoff_date.date_naive();

    EvaluationSnapshot {
        id: EvaluationSnapshot::storage_id(
            &request.product_id,
            &request.location_id,
            request.lot_id.as_deref(),
            evaluation_date,
        ),
        product_id: request.product_id.clone(),
        location_id: request.location_id.clone(),
        lot_id: request.lot_id.clone(),
        company_id: request.company_id.clone(),
        evaluation_date,
        average_cost: average.unit_cost,
        average_purchase_cost: average.unit_purchase_cost,
        fifo_cost: fifo.unit_cost,
        fifo_purchase_cost: fifo.unit_purchase_cost,
        lifo_cost: lifo.unit_cost,
        lifo_purchase_cost: lifo.unit_purchase_cost,
        list_price: reference.list_price,
        standard_cost: reference.standard_cost,
        product_qty: request.product_qty,
        name,
        stock_take_id: None,
        stock_take_line_id: None,
        calculated_at: Utc::now().naive_utc(),
    }
}

//! Valuation domain models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input bundle for one stock position to be evaluated. All three valuation
/// algorithms share a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub product_id: String,
    pub lot_id: Option<String>,
    pub location_id: String,
    pub company_id: String,
    /// The quantity on hand whose cost is being evaluated.
    pub product_qty: Decimal,
    /// Movements dated after this instant are ignored.
    pub cutoff_date: DateTime<Utc>,
}

/// Per-algorithm output.
///
/// Invariant: when the consumed-quantity total is zero within UoM precision,
/// both costs are exactly zero; `incomplete` still reflects whatever was
/// observed before termination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub unit_cost: Decimal,
    pub unit_purchase_cost: Decimal,
    /// True if any scanned movement lacked invoice pricing data.
    pub incomplete: bool,
}

/// The persisted outcome of one evaluation run for one stock position.
/// Created once per run and never mutated afterward; re-evaluation replaces
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSnapshot {
    /// e.g. "PRODUCTID_LOCATIONID_YYYY-MM-DD" or unique DB ID.
    pub id: String,
    pub product_id: String,
    pub location_id: String,
    pub lot_id: Option<String>,
    pub company_id: String,
    pub evaluation_date: NaiveDate,

    pub average_cost: Decimal,
    pub average_purchase_cost: Decimal,
    pub fifo_cost: Decimal,
    pub fifo_purchase_cost: Decimal,
    pub lifo_cost: Decimal,
    pub lifo_purchase_cost: Decimal,

    /// Current list price from the product catalog.
    pub list_price: Decimal,
    /// Current standard cost from the product catalog.
    pub standard_cost: Decimal,

    pub product_qty: Decimal,

    /// Empty unless any algorithm flagged incomplete invoice data, in which
    /// case it holds a fixed diagnostic message.
    pub name: String,

    /// Stock take this snapshot belongs to, when evaluated as part of one.
    #[serde(default)]
    pub stock_take_id: Option<String>,
    #[serde(default)]
    pub stock_take_line_id: Option<String>,

    pub calculated_at: NaiveDateTime,
}

impl EvaluationSnapshot {
    /// Composite storage id for one (product, location, lot, date) position.
    pub fn storage_id(
        product_id: &str,
        location_id: &str,
        lot_id: Option<&str>,
        evaluation_date: NaiveDate,
    ) -> String {
        format!(
            "{}_{}_{}_{}",
            product_id,
            location_id,
            lot_id.unwrap_or("-"),
            evaluation_date.format("%Y-%m-%d")
        )
    }
}

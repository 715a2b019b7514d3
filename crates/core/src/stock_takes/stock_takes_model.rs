use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::valuation::EvaluationRequest;

/// One counted stock position within a stock take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTakeLine {
    pub id: String,
    pub product_id: String,
    pub lot_id: Option<String>,
    pub location_id: String,
    /// Counted quantity on hand, in the product's reference unit.
    pub product_qty: Decimal,
}

/// One stock-taking event: a set of counted positions as of a fixed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTake {
    pub id: String,
    pub company_id: String,
    pub date: DateTime<Utc>,
    pub lines: Vec<StockTakeLine>,
}

impl StockTakeLine {
    /// Builds the evaluation request for this line; the stock take supplies
    /// the company and the cutoff date.
    pub fn to_request(&self, stock_take: &StockTake) -> EvaluationRequest {
        EvaluationRequest {
            product_id: self.product_id.clone(),
            lot_id: self.lot_id.clone(),
            location_id: self.location_id.clone(),
            company_id: stock_take.company_id.clone(),
            product_qty: self.product_qty,
            cutoff_date: stock_take.date,
        }
    }
}

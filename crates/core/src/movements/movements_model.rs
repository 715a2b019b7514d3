use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Classification of a stock location relative to the company's own stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationKind {
    /// Company-owned stock location.
    Internal,
    /// Supplier, customer, loss or any other non-company location.
    External,
}

/// Lifecycle state of the invoice a purchase invoice line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceState {
    Draft,
    Open,
    Paid,
    Cancelled,
}

impl InvoiceState {
    /// Only open or paid invoices contribute to invoice-derived unit costs.
    pub fn is_settled(&self) -> bool {
        matches!(self, InvoiceState::Open | InvoiceState::Paid)
    }
}

/// One invoice line attached to a purchase line, flattened to the fields the
/// cost algorithms need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub subtotal: Decimal,
    pub quantity: Decimal,
    /// Currency of the subtotal (e.g. "USD", "EUR").
    pub currency: String,
    /// Unit of measure of the quantity (e.g. "kg", "unit").
    pub uom: String,
    pub state: InvoiceState,
}

/// The purchase order line a movement originated from, with its invoice
/// lines pre-resolved. The core never traverses the purchase graph itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    pub subtotal: Decimal,
    pub quantity: Decimal,
    pub currency: String,
    pub uom: String,
    #[serde(default)]
    pub invoice_lines: Vec<InvoiceLine>,
}

/// One quantity-transfer event from the stock ledger.
///
/// Movement lines are immutable facts pulled from history; the valuation
/// algorithms only consume them. `quantity` is already normalized to the
/// product's reference unit by the movement source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementLine {
    pub id: String,
    pub movement_date: DateTime<Utc>,
    pub quantity: Decimal,
    pub source_location_kind: LocationKind,
    pub destination_location_kind: LocationKind,
    /// Purchase line this movement fulfils, if any.
    #[serde(default)]
    pub purchase: Option<PurchaseLine>,
}

impl MovementLine {
    /// Incoming stock: external source, internal destination.
    pub fn is_receipt(&self) -> bool {
        self.source_location_kind == LocationKind::External
            && self.destination_location_kind == LocationKind::Internal
    }

    /// Outgoing stock: internal source, external destination.
    pub fn is_issue(&self) -> bool {
        self.source_location_kind == LocationKind::Internal
            && self.destination_location_kind == LocationKind::External
    }
}

/// Which movement directions a ledger query returns.
///
/// Average and FIFO costs consume receipts only; LIFO needs both directions
/// to reconstruct historical balances. This asymmetry is intentional and must
/// not be unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementQueryMode {
    Receipts,
    ReceiptsAndIssues,
}

impl FromStr for MovementQueryMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use crate::constants::*;
        match s {
            s if s == QUERY_MODE_AVERAGE => Ok(MovementQueryMode::Receipts),
            s if s == QUERY_MODE_FIFO => Ok(MovementQueryMode::Receipts),
            s if s == QUERY_MODE_LIFO => Ok(MovementQueryMode::ReceiptsAndIssues),
            _ => Err(ValidationError::UnsupportedQueryMode(s.to_string())),
        }
    }
}

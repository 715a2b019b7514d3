//! Derives per-line cost inputs for the valuation algorithms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::movements::MovementLine;
use crate::utils::{is_zero, PrecisionSettings};

/// Cost inputs extracted from one movement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostData {
    /// Movement quantity in the product's reference unit.
    pub quantity: Decimal,
    /// Unit cost derived from settled invoice lines, 0 when unavailable.
    pub sale_unit_cost: Decimal,
    /// Unit cost derived from the purchase line, 0 when unavailable.
    pub purchase_unit_cost: Decimal,
    /// True when the movement has a purchase line without invoice lines.
    pub incomplete: bool,
}

/// Combines move-level and invoice-level data into the `(quantity,
/// sale_unit_cost, purchase_unit_cost, incomplete)` tuple each valuation
/// algorithm consumes.
///
/// A movement without a purchase line yields zero costs and a clean flag:
/// there is no purchase to evaluate against. A purchase line without invoice
/// lines flags the data as incomplete while leaving the sale cost at zero.
pub fn extract_cost_data(line: &MovementLine, precision: &PrecisionSettings) -> CostData {
    let mut sale_unit_cost = Decimal::ZERO;
    let mut purchase_unit_cost = Decimal::ZERO;
    let mut incomplete = false;

    if let Some(purchase) = &line.purchase {
        if purchase.invoice_lines.is_empty() {
            incomplete = true;
        } else {
            let mut invoiced_subtotal = Decimal::ZERO;
            let mut invoiced_quantity = Decimal::ZERO;
            for invoice_line in purchase
                .invoice_lines
                .iter()
                .filter(|l| l.state.is_settled())
            {
                invoiced_subtotal += invoice_line.subtotal;
                invoiced_quantity += invoice_line.quantity;
            }
            if !is_zero(invoiced_quantity, precision.uom_dp) {
                sale_unit_cost = invoiced_subtotal / invoiced_quantity;
            }
        }

        if !is_zero(purchase.quantity, precision.uom_dp) {
            purchase_unit_cost = purchase.subtotal / purchase.quantity;
        }
    }

    CostData {
        quantity: line.quantity,
        sale_unit_cost,
        purchase_unit_cost,
        incomplete,
    }
}

//! Per-movement derived unit costs and line totals.
//!
//! These feed the unit prices used by movement-level reporting. The host
//! system recomputes them whenever a movement's purchase or invoice data
//! changes; the core only provides the computation.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalogTrait;
use crate::conversion::{convert_unit_price, CurrencyConverterTrait, UomConverterTrait};
use crate::errors::Result;
use crate::movements::MovementLine;
use crate::utils::{is_zero, PrecisionSettings};

/// The three derived unit costs of a movement and their line totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MovementCosts {
    pub invoice_cost: Decimal,
    pub invoice_cost_total: Decimal,
    pub manual_cost: Decimal,
    pub manual_cost_total: Decimal,
    pub purchase_cost: Decimal,
    pub purchase_cost_total: Decimal,
}

/// Unit purchase cost of a movement: purchase-line subtotal over quantity,
/// converted to the company currency and the product's reference unit.
/// Zero when the movement has no purchase line, or when either the subtotal
/// (at monetary precision) or the quantity (at UoM precision) is zero.
pub fn purchase_unit_cost(
    line: &MovementLine,
    to_currency: &str,
    to_uom: &str,
    currency_converter: &dyn CurrencyConverterTrait,
    uom_converter: &dyn UomConverterTrait,
    precision: &PrecisionSettings,
) -> Result<Decimal> {
    let purchase = match &line.purchase {
        Some(purchase) => purchase,
        None => return Ok(Decimal::ZERO),
    };
    if is_zero(purchase.subtotal, precision.monetary_dp)
        || is_zero(purchase.quantity, precision.uom_dp)
    {
        return Ok(Decimal::ZERO);
    }
    convert_unit_price(
        purchase.subtotal / purchase.quantity,
        &purchase.currency,
        &purchase.uom,
        to_currency,
        to_uom,
        currency_converter,
        uom_converter,
    )
}

/// Unit invoice cost of a movement: the mean of each invoice line's
/// converted subtotal-over-quantity. Falls back to the purchase cost when
/// the purchase line carries no invoice lines at all, and to zero when the
/// movement has no purchase line.
///
/// Invoice lines with a zero quantity contribute nothing to the sum but
/// still count toward the divisor.
pub fn invoice_unit_cost(
    line: &MovementLine,
    to_currency: &str,
    to_uom: &str,
    currency_converter: &dyn CurrencyConverterTrait,
    uom_converter: &dyn UomConverterTrait,
    precision: &PrecisionSettings,
) -> Result<Decimal> {
    let purchase = match &line.purchase {
        Some(purchase) => purchase,
        None => return Ok(Decimal::ZERO),
    };
    if purchase.invoice_lines.is_empty() {
        debug!(
            "Movement {} has a purchase line without invoice lines, using purchase cost",
            line.id
        );
        return purchase_unit_cost(
            line,
            to_currency,
            to_uom,
            currency_converter,
            uom_converter,
            precision,
        );
    }

    let mut invoice_cost = Decimal::ZERO;
    for invoice_line in purchase
        .invoice_lines
        .iter()
        .filter(|l| !is_zero(l.quantity, precision.uom_dp))
    {
        invoice_cost += convert_unit_price(
            invoice_line.subtotal / invoice_line.quantity,
            &invoice_line.currency,
            &invoice_line.uom,
            to_currency,
            to_uom,
            currency_converter,
            uom_converter,
        )?;
    }
    Ok(invoice_cost / Decimal::from(purchase.invoice_lines.len()))
}

/// Seeds a movement's manual cost from the product's current standard cost.
///
/// Invoked by the creation/update collaborator when the movement's product
/// is set; the value is user-editable afterward and never recomputed here.
pub fn seed_manual_cost(catalog: &dyn ProductCatalogTrait, product_id: &str) -> Result<Decimal> {
    Ok(catalog.product_reference(product_id)?.standard_cost)
}

/// Bundles the three derived unit costs and their totals for one movement.
/// `manual_cost` is the stored, externally supplied value.
pub fn compute_movement_costs(
    line: &MovementLine,
    manual_cost: Decimal,
    to_currency: &str,
    to_uom: &str,
    currency_converter: &dyn CurrencyConverterTrait,
    uom_converter: &dyn UomConverterTrait,
    precision: &PrecisionSettings,
) -> Result<MovementCosts> {
    let invoice_cost = invoice_unit_cost(
        line,
        to_currency,
        to_uom,
        currency_converter,
        uom_converter,
        precision,
    )?;
    let purchase_cost = purchase_unit_cost(
        line,
        to_currency,
        to_uom,
        currency_converter,
        uom_converter,
        precision,
    )?;

    Ok(MovementCosts {
        invoice_cost,
        invoice_cost_total: invoice_cost * line.quantity,
        manual_cost,
        manual_cost_total: manual_cost * line.quantity,
        purchase_cost,
        purchase_cost_total: purchase_cost * line.quantity,
    })
}

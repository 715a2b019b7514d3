//! The three cost reducers: weighted average, FIFO, and LIFO.
//!
//! Each reducer consumes an already-materialized, read-only slice of
//! movement lines ordered most-recent-first (`movement_date desc, id desc`,
//! as supplied by the movement repository) and reduces it to a
//! [`ValuationResult`]. All quantity comparisons go through the configured
//! unit-of-measure precision instead of exact equality.

use log::debug;
use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::movements::{extract_cost_data, CostData, MovementLine};
use crate::utils::{compare, is_zero, PrecisionSettings};
use crate::valuation::ValuationResult;

/// Outcome of consuming one movement line: either the reducer keeps
/// scanning or it has attributed everything it needs and stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeStep {
    Continue,
    Done,
}

/// Shared accumulator for the three reducers: quantity-weighted cost sums
/// plus the sticky incomplete-data flag.
#[derive(Debug, Default)]
struct CostAccumulator {
    sale_cost_total: Decimal,
    purchase_cost_total: Decimal,
    quantity_total: Decimal,
    incomplete: bool,
}

impl CostAccumulator {
    /// Attributes `quantity` units at the given per-unit costs.
    fn consume(&mut self, quantity: Decimal, cost: &CostData) {
        self.sale_cost_total += quantity * cost.sale_unit_cost;
        self.purchase_cost_total += quantity * cost.purchase_unit_cost;
        self.quantity_total += quantity;
    }

    /// The incomplete flag sticks for every scanned line, including lines
    /// the reducer does not consume.
    fn observe(&mut self, cost: &CostData) {
        if cost.incomplete {
            self.incomplete = true;
        }
    }

    /// Divides the accumulated sums by the consumed quantity. A zero
    /// quantity (within UoM precision) yields costs of exactly zero rather
    /// than a division.
    fn finish(self, uom_dp: u32) -> ValuationResult {
        if is_zero(self.quantity_total, uom_dp) {
            return ValuationResult {
                unit_cost: Decimal::ZERO,
                unit_purchase_cost: Decimal::ZERO,
                incomplete: self.incomplete,
            };
        }
        ValuationResult {
            unit_cost: self.sale_cost_total / self.quantity_total,
            unit_purchase_cost: self.purchase_cost_total / self.quantity_total,
            incomplete: self.incomplete,
        }
    }
}

/// Weighted-average unit cost over every receipt line.
///
/// Consumes all lines with no early termination, so the result is
/// independent of the ordering the repository fixed for determinism.
pub fn average_cost(lines: &[MovementLine], precision: &PrecisionSettings) -> ValuationResult {
    let mut acc = CostAccumulator::default();

    for line in lines {
        let cost = extract_cost_data(line, precision);
        acc.observe(&cost);
        acc.consume(cost.quantity, &cost);
    }

    acc.finish(precision.uom_dp)
}

/// FIFO unit cost for `product_qty` units, valuing the most recent receipts
/// first and stopping once the requested quantity is covered.
pub fn fifo_cost(
    lines: &[MovementLine],
    product_qty: Decimal,
    precision: &PrecisionSettings,
) -> ValuationResult {
    let mut acc = CostAccumulator::default();
    let mut remaining = product_qty;

    for line in lines {
        let cost = extract_cost_data(line, precision);
        acc.observe(&cost);
        if fifo_step(&mut acc, &mut remaining, &cost, precision.uom_dp) == ConsumeStep::Done {
            break;
        }
    }

    acc.finish(precision.uom_dp)
}

/// Consumes one receipt line against the remaining quantity to value.
/// A line larger than the remainder is consumed partially and ends the scan.
fn fifo_step(
    acc: &mut CostAccumulator,
    remaining: &mut Decimal,
    cost: &CostData,
    uom_dp: u32,
) -> ConsumeStep {
    if compare(*remaining, cost.quantity, uom_dp) != Ordering::Less {
        acc.consume(cost.quantity, cost);
        *remaining -= cost.quantity;
        ConsumeStep::Continue
    } else {
        acc.consume(*remaining, cost);
        ConsumeStep::Done
    }
}

/// LIFO unit cost for `product_qty` units.
///
/// Walks the full ledger (receipts and issues) newest to oldest,
/// reconstructing the stock balance that existed before each movement:
/// issues add their quantity back, receipts remove theirs. A receipt whose
/// reconstructed prior balance falls below the quantity still to value is a
/// layer supplying oldest-unconsumed units under a last-in-first-out
/// reading, and is attributed accordingly.
///
/// If no receipt ever drives the running balance to zero or below, the scan
/// ends without terminating and the consumed total may undershoot
/// `product_qty`. That under-valuation is a known boundary condition of the
/// algorithm and is preserved as-is.
pub fn lifo_cost(
    lines: &[MovementLine],
    product_qty: Decimal,
    precision: &PrecisionSettings,
) -> ValuationResult {
    let mut acc = CostAccumulator::default();
    let mut remaining_to_value = product_qty;
    let mut running_balance = product_qty;

    for line in lines {
        let cost = extract_cost_data(line, precision);
        acc.observe(&cost);
        let step = lifo_step(
            &mut acc,
            &mut remaining_to_value,
            &mut running_balance,
            line,
            &cost,
            precision.uom_dp,
        );
        if step == ConsumeStep::Done {
            break;
        }
    }

    if !is_zero(remaining_to_value, precision.uom_dp) {
        debug!(
            "LIFO scan ended with {} units unattributed (history never exhausted the balance)",
            remaining_to_value
        );
    }

    acc.finish(precision.uom_dp)
}

/// Rebuilds the pre-movement balance for one line and attributes receipt
/// layers once the balance drops below the quantity still to value.
/// Lines that are neither receipts nor issues move no balance.
fn lifo_step(
    acc: &mut CostAccumulator,
    remaining_to_value: &mut Decimal,
    running_balance: &mut Decimal,
    line: &MovementLine,
    cost: &CostData,
    uom_dp: u32,
) -> ConsumeStep {
    if line.is_issue() {
        *running_balance += cost.quantity;
        return ConsumeStep::Continue;
    }
    if !line.is_receipt() {
        return ConsumeStep::Continue;
    }

    *running_balance -= cost.quantity;
    if compare(*remaining_to_value, *running_balance, uom_dp) != Ordering::Greater {
        // This receipt sits entirely above the layers still owed.
        return ConsumeStep::Continue;
    }

    if compare(*running_balance, Decimal::ZERO, uom_dp) == Ordering::Greater {
        // Part of this receipt is attributable; older layers still owe the
        // rest.
        let portion = *remaining_to_value - *running_balance;
        acc.consume(portion, cost);
        *remaining_to_value = *running_balance;
        ConsumeStep::Continue
    } else {
        // Oldest exhausted layer: everything still owed costs at this
        // receipt's unit prices.
        acc.consume(*remaining_to_value, cost);
        *remaining_to_value = Decimal::ZERO;
        ConsumeStep::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movements::LocationKind;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn receipt(quantity: Decimal) -> MovementLine {
        MovementLine {
            id: "m1".to_string(),
            movement_date: Utc::now(),
            quantity,
            source_location_kind: LocationKind::External,
            destination_location_kind: LocationKind::Internal,
            purchase: None,
        }
    }

    #[test]
    fn terminating_lifo_layer_leaves_nothing_owed() {
        let line = receipt(dec!(10));
        let cost = CostData {
            quantity: dec!(10),
            sale_unit_cost: dec!(5),
            purchase_unit_cost: dec!(5),
            incomplete: false,
        };
        let mut acc = CostAccumulator::default();
        let mut remaining_to_value = dec!(5);
        let mut running_balance = dec!(5);

        let step = lifo_step(
            &mut acc,
            &mut remaining_to_value,
            &mut running_balance,
            &line,
            &cost,
            3,
        );
        assert_eq!(step, ConsumeStep::Done);
        assert_eq!(remaining_to_value, Decimal::ZERO);
        assert_eq!(acc.quantity_total, dec!(5));
    }
}

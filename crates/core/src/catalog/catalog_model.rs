use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Static product reference values, in the company currency and the
/// product's reference unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductReference {
    /// Current list (sale) price.
    pub list_price: Decimal,
    /// Current standard cost.
    pub standard_cost: Decimal,
}

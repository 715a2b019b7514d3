//! Contracts for the external currency and UoM conversion services.
//!
//! The core treats both conversions as black boxes supplied by the host
//! system. A unit price is a derived unit `currency / product UoM` (such as
//! `EUR/kg`), so converting one always applies the currency leg first,
//! without rounding, and the unit-of-measure leg second.

use rust_decimal::Decimal;

use crate::errors::Result;

/// Converts monetary amounts between currencies.
pub trait CurrencyConverterTrait: Send + Sync {
    /// Converts `amount` from `from_currency` to `to_currency`.
    /// Implementations must not round the result.
    fn convert(&self, amount: Decimal, from_currency: &str, to_currency: &str) -> Result<Decimal>;
}

/// Converts unit prices between units of measure.
pub trait UomConverterTrait: Send + Sync {
    /// Converts a price expressed per `from_uom` to a price per `to_uom`.
    fn convert_price(&self, price: Decimal, from_uom: &str, to_uom: &str) -> Result<Decimal>;
}

/// Converts a unit price from its original currency and UoM to the target
/// currency and UoM, currency leg first.
pub fn convert_unit_price(
    unit_price: Decimal,
    from_currency: &str,
    from_uom: &str,
    to_currency: &str,
    to_uom: &str,
    currency_converter: &dyn CurrencyConverterTrait,
    uom_converter: &dyn UomConverterTrait,
) -> Result<Decimal> {
    let converted = currency_converter.convert(unit_price, from_currency, to_currency)?;
    uom_converter.convert_price(converted, from_uom, to_uom)
}

/// Pass-through converter for single-currency, single-UoM deployments and
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl CurrencyConverterTrait for IdentityConverter {
    fn convert(&self, amount: Decimal, _from: &str, _to: &str) -> Result<Decimal> {
        Ok(amount)
    }
}

impl UomConverterTrait for IdentityConverter {
    fn convert_price(&self, price: Decimal, _from: &str, _to: &str) -> Result<Decimal> {
        Ok(price)
    }
}

/// Decimal precision for monetary zero checks (accounting precision)
pub const DEFAULT_MONETARY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for unit-of-measure quantity comparisons
pub const DEFAULT_UOM_DECIMAL_PRECISION: u32 = 3;

/// Diagnostic set on an evaluation snapshot when any algorithm consumed a
/// movement without invoice pricing data
pub const INCOMPLETE_DATA_MESSAGE: &str = "Incomplete invoice data";

/// Movement query mode selecting receipts only (average cost)
pub const QUERY_MODE_AVERAGE: &str = "average";

/// Movement query mode selecting receipts only (FIFO cost)
pub const QUERY_MODE_FIFO: &str = "fifo";

/// Movement query mode selecting receipts and issues (LIFO cost)
pub const QUERY_MODE_LIFO: &str = "lifo";

//! Costeval Core - Historical inventory cost evaluation.
//!
//! This crate computes historical unit-cost estimates (weighted average,
//! FIFO, LIFO, plus purchase/invoice derived costs) for inventory quantities
//! on hand at a snapshot date, by consuming a chronologically ordered ledger
//! of stock movements. It is database-agnostic and defines traits that are
//! implemented by the host ERP's persistence layer.

pub mod catalog;
pub mod constants;
pub mod conversion;
pub mod errors;
pub mod movements;
pub mod stock_takes;
pub mod utils;
pub mod valuation;

// Re-export common types from movement and valuation modules
pub use movements::*;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

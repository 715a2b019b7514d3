//! Cost valuation - the three reducers, snapshot assembly, and contracts.

pub mod valuation_calculator;
mod valuation_model;
pub mod valuation_service;
mod valuation_traits;

pub use valuation_calculator::*;
pub use valuation_model::*;
pub use valuation_service::*;
pub use valuation_traits::*;

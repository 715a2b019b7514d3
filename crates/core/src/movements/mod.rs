//! Stock movement ledger - models, query contract, and per-movement costs.

pub mod cost_extractor;
pub mod movement_costs;
mod movements_model;
mod movements_traits;

pub use cost_extractor::*;
pub use movement_costs::*;
pub use movements_model::*;
pub use movements_traits::*;

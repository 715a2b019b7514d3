//! Stock-taking events - grouping evaluation runs and their snapshots.

mod stock_takes_model;
pub mod stock_takes_service;

pub use stock_takes_model::*;
pub use stock_takes_service::*;

#[cfg(test)]
mod stock_takes_service_tests;

//! Product catalog - static reference values supplied by the host ERP.

mod catalog_model;
mod catalog_traits;

pub use catalog_model::*;
pub use catalog_traits::*;

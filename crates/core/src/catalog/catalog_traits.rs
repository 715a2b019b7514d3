use crate::catalog::ProductReference;
use crate::errors::Result;

/// Trait defining the contract against the external product catalog.
pub trait ProductCatalogTrait: Send + Sync {
    /// Returns the current list price and standard cost for a product.
    fn product_reference(&self, product_id: &str) -> Result<ProductReference>;
}

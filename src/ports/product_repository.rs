//! Product repository port.

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};
use async_trait::async_trait;

/// Repository port for inventory products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Save a new product.
    async fn save(&self, product: &Product) -> Result<(), DomainError>;

    /// Update an existing product (price, stock, thresholds).
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the product doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Find a product by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// List all products.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProductRepository) {}
    }
}

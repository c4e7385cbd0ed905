//! Product inventory handlers: create, adjust stock, list.

use std::sync::Arc;

use tracing::info;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;

/// Command to add a product to the inventory.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub price_cents: i64,
    pub stock: i32,
    pub low_stock_threshold: i32,
}

/// Handler for product creation.
pub struct CreateProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(&self, cmd: CreateProductCommand) -> Result<Product, DomainError> {
        let product = Product::new(
            ProductId::new(),
            cmd.name,
            cmd.price_cents,
            cmd.stock,
            cmd.low_stock_threshold,
        )?;
        self.products.save(&product).await?;
        Ok(product)
    }
}

/// Command to adjust stock by a signed delta.
#[derive(Debug, Clone)]
pub struct AdjustStockCommand {
    pub product_id: ProductId,
    pub delta: i32,
}

/// Handler for restocks and corrections.
pub struct AdjustStockHandler {
    products: Arc<dyn ProductRepository>,
}

impl AdjustStockHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(&self, cmd: AdjustStockCommand) -> Result<Product, DomainError> {
        let mut product = self
            .products
            .find_by_id(&cmd.product_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProductNotFound,
                    format!("No product with id {}", cmd.product_id),
                )
            })?;

        product.adjust_stock(cmd.delta)?;
        self.products.update(&product).await?;
        info!(product = %product.name, stock = product.stock, "stock adjusted");
        Ok(product)
    }
}

/// Handler listing the inventory.
pub struct ListProductsHandler {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(&self) -> Result<Vec<Product>, DomainError> {
        self.products.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProductRepository;

    #[tokio::test]
    async fn creates_product_and_adjusts_stock() {
        let repo = Arc::new(MockProductRepository::with(vec![]));
        let create = CreateProductHandler::new(repo.clone());
        let adjust = AdjustStockHandler::new(repo.clone());

        let product = create
            .handle(CreateProductCommand {
                name: "Water 500ml".to_string(),
                price_cents: 150,
                stock: 24,
                low_stock_threshold: 6,
            })
            .await
            .unwrap();

        let adjusted = adjust
            .handle(AdjustStockCommand {
                product_id: product.id,
                delta: -4,
            })
            .await
            .unwrap();

        assert_eq!(adjusted.stock, 20);
    }

    #[tokio::test]
    async fn adjust_rejects_unknown_product() {
        let repo = Arc::new(MockProductRepository::with(vec![]));
        let adjust = AdjustStockHandler::new(repo);

        let result = adjust
            .handle(AdjustStockCommand {
                product_id: ProductId::new(),
                delta: 1,
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn adjust_rejects_draining_below_zero() {
        let repo = Arc::new(MockProductRepository::with(vec![]));
        let create = CreateProductHandler::new(repo.clone());
        let adjust = AdjustStockHandler::new(repo.clone());

        let product = create
            .handle(CreateProductCommand {
                name: "Towel".to_string(),
                price_cents: 900,
                stock: 2,
                low_stock_threshold: 1,
            })
            .await
            .unwrap();

        let result = adjust
            .handle(AdjustStockCommand {
                product_id: product.id,
                delta: -3,
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InsufficientStock);
        // Stock is unchanged in the store.
        let kept = repo.get(&product.id).unwrap();
        assert_eq!(kept.stock, 2);
    }
}

//! RecordSaleHandler - the point-of-sale workflow.
//!
//! Validate every line against the inventory, snapshot names and prices,
//! deduct stock, and append the sale. Stock updates and the sale insert
//! are not wrapped in one transaction; the store's consistency is
//! per-statement, matching the rest of the write paths.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, ProductId, SaleId};
use crate::domain::sales::{Sale, SaleLine};
use crate::ports::{Clock, ProductRepository, SaleRepository};

/// One requested line of a sale.
#[derive(Debug, Clone)]
pub struct SaleItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Command to record a sale.
#[derive(Debug, Clone)]
pub struct RecordSaleCommand {
    pub items: Vec<SaleItem>,
}

/// Handler for recording sales.
pub struct RecordSaleHandler {
    products: Arc<dyn ProductRepository>,
    sales: Arc<dyn SaleRepository>,
    clock: Arc<dyn Clock>,
}

impl RecordSaleHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        sales: Arc<dyn SaleRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            products,
            sales,
            clock,
        }
    }

    pub async fn handle(&self, cmd: RecordSaleCommand) -> Result<Sale, DomainError> {
        if cmd.items.is_empty() {
            return Err(DomainError::validation("items", "A sale needs at least one item"));
        }

        // Validate every line before touching stock; the first failing
        // item rejects the whole sale.
        let mut updated_products = Vec::with_capacity(cmd.items.len());
        let mut lines = Vec::with_capacity(cmd.items.len());
        for item in &cmd.items {
            let mut product = self
                .products
                .find_by_id(&item.product_id)
                .await?
                .ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::ProductNotFound,
                        format!("No product with id {}", item.product_id),
                    )
                })?;

            product.deduct(item.quantity)?;
            lines.push(SaleLine {
                product_id: product.id,
                product_name: product.name.clone(),
                unit_price_cents: product.price_cents,
                quantity: item.quantity,
            });
            updated_products.push(product);
        }

        let sale = Sale::record(SaleId::new(), lines, self.clock.now())?;

        for product in &updated_products {
            self.products.update(product).await?;
        }
        self.sales.save(&sale).await?;

        info!(total_cents = sale.total_cents, lines = sale.lines.len(), "sale recorded");
        Ok(sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::application::handlers::test_support::{MockProductRepository, MockSaleRepository};
    use crate::domain::catalog::Product;
    use chrono::NaiveDate;

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(16, 30, 0)
                .unwrap(),
        ))
    }

    fn water() -> Product {
        Product::new(ProductId::new(), "Water 500ml", 150, 24, 6).unwrap()
    }

    fn bar() -> Product {
        Product::new(ProductId::new(), "Protein bar", 350, 10, 3).unwrap()
    }

    #[tokio::test]
    async fn records_sale_and_deducts_stock() {
        let water = water();
        let bar = bar();
        let products = Arc::new(MockProductRepository::with(vec![water.clone(), bar.clone()]));
        let sales = Arc::new(MockSaleRepository::new());
        let handler = RecordSaleHandler::new(products.clone(), sales.clone(), clock());

        let sale = handler
            .handle(RecordSaleCommand {
                items: vec![
                    SaleItem {
                        product_id: water.id,
                        quantity: 2,
                    },
                    SaleItem {
                        product_id: bar.id,
                        quantity: 3,
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(sale.total_cents, 2 * 150 + 3 * 350);
        assert_eq!(products.get(&water.id).unwrap().stock, 22);
        assert_eq!(products.get(&bar.id).unwrap().stock, 7);
        assert_eq!(sales.stored().len(), 1);
    }

    #[tokio::test]
    async fn line_snapshots_survive_later_price_changes() {
        let water = water();
        let products = Arc::new(MockProductRepository::with(vec![water.clone()]));
        let sales = Arc::new(MockSaleRepository::new());
        let handler = RecordSaleHandler::new(products.clone(), sales.clone(), clock());

        handler
            .handle(RecordSaleCommand {
                items: vec![SaleItem {
                    product_id: water.id,
                    quantity: 1,
                }],
            })
            .await
            .unwrap();

        let recorded = &sales.stored()[0];
        assert_eq!(recorded.lines[0].product_name, "Water 500ml");
        assert_eq!(recorded.lines[0].unit_price_cents, 150);
    }

    #[tokio::test]
    async fn rejects_insufficient_stock_without_recording() {
        let water = water();
        let products = Arc::new(MockProductRepository::with(vec![water.clone()]));
        let sales = Arc::new(MockSaleRepository::new());
        let handler = RecordSaleHandler::new(products.clone(), sales.clone(), clock());

        let result = handler
            .handle(RecordSaleCommand {
                items: vec![SaleItem {
                    product_id: water.id,
                    quantity: 25,
                }],
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InsufficientStock);
        assert!(sales.stored().is_empty());
        assert_eq!(products.get(&water.id).unwrap().stock, 24);
    }

    #[tokio::test]
    async fn rejects_empty_sale() {
        let handler = RecordSaleHandler::new(
            Arc::new(MockProductRepository::with(vec![])),
            Arc::new(MockSaleRepository::new()),
            clock(),
        );

        let result = handler.handle(RecordSaleCommand { items: vec![] }).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_unknown_product() {
        let handler = RecordSaleHandler::new(
            Arc::new(MockProductRepository::with(vec![])),
            Arc::new(MockSaleRepository::new()),
            clock(),
        );

        let result = handler
            .handle(RecordSaleCommand {
                items: vec![SaleItem {
                    product_id: ProductId::new(),
                    quantity: 1,
                }],
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::ProductNotFound);
    }
}

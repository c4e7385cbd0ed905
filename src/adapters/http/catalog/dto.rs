//! HTTP DTOs for inventory endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;

/// Request to add a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price_cents: i64,
    pub stock: i32,
    #[serde(default)]
    pub low_stock_threshold: i32,
}

/// Request to adjust stock by a signed delta.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i32,
}

/// Product details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub stock: i32,
    pub low_stock: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let low_stock = product.is_low_stock();
        Self {
            id: product.id.to_string(),
            name: product.name,
            price_cents: product.price_cents,
            stock: product.stock,
            low_stock,
        }
    }
}

/// Response listing the inventory.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

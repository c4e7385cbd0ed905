//! Inventory HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdjustStockRequest, CreateProductRequest, ProductListResponse, ProductResponse};
pub use handlers::CatalogAppState;
pub use routes::catalog_routes;

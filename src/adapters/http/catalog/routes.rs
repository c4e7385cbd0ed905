//! Axum router for inventory endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{adjust_stock, create_product, list_products, CatalogAppState};

/// Create the products API router.
///
/// # Routes
/// - `GET /` - list the inventory
/// - `POST /` - add a product
/// - `POST /:id/stock` - adjust stock by a signed delta
pub fn catalog_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id/stock", post(adjust_stock))
}

//! Axum router for point-of-sale endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_today_sales, record_sale, SalesAppState};

/// Create the sales API router.
///
/// # Routes
/// - `POST /` - record a sale
/// - `GET /today` - today's sales and running total
pub fn sales_routes() -> Router<SalesAppState> {
    Router::new()
        .route("/", post(record_sale))
        .route("/today", get(list_today_sales))
}

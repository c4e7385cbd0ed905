//! Point-of-sale HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{DailySalesResponse, RecordSaleRequest, SaleItemRequest, SaleResponse};
pub use handlers::SalesAppState;
pub use routes::sales_routes;

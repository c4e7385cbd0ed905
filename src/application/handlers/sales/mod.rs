//! Point-of-sale handlers.

mod list_sales;
mod record_sale;

pub use list_sales::{DailySales, ListDailySalesHandler};
pub use record_sale::{RecordSaleCommand, RecordSaleHandler, SaleItem};

//! Inventory handlers.

mod manage_products;

pub use manage_products::{
    AdjustStockCommand, AdjustStockHandler, CreateProductCommand, CreateProductHandler,
    ListProductsHandler,
};

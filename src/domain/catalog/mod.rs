//! Catalog domain - the shop inventory.

mod product;

pub use product::Product;

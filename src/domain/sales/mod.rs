//! Sales domain - point-of-sale transactions.

mod sale;

pub use sale::{Sale, SaleLine};

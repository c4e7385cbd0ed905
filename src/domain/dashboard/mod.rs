//! Dashboard domain - derived reporting counters.

mod overview;

pub use overview::{DashboardOverview, EXPIRY_WINDOW_DAYS};

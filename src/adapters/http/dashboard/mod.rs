//! Dashboard HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::OverviewResponse;
pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;

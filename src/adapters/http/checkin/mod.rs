//! Check-in HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckInRequest, CheckInResponse};
pub use handlers::{CheckInApiError, CheckInAppState};
pub use routes::checkin_routes;

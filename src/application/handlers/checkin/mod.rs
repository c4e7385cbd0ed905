//! Check-in workflow handlers.

mod check_in_member;

pub use check_in_member::{CheckInCommand, CheckInHandler, CheckInResult};

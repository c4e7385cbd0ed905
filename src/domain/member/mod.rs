//! Member domain - gym clients and their entry codes.

mod aggregate;
mod code;
mod schedule;

pub use aggregate::Member;
pub use code::MemberCode;
pub use schedule::{ScheduleRestriction, MORNING_CUTOFF_HOUR};

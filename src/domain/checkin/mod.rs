//! Check-in domain - the entry validator and its facts.
//!
//! The admission decision is a pure function over (code, roster snapshot,
//! moment); the only state-changing effect of a check-in is the append of
//! one [`EntryRecord`], done by the application layer after a positive
//! decision.

mod entry;
mod errors;
mod moment;
mod roster;
mod validator;

pub use entry::EntryRecord;
pub use errors::CheckInError;
pub use moment::CheckInMoment;
pub use roster::RosterEntry;
pub use validator::{evaluate_entry, Admission};

//! HTTP DTOs for the check-in endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checkin::CheckInResult;

/// Request to check a member in.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    /// Raw code as typed at the front desk.
    pub code: String,
}

/// Response for a successful check-in.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    /// The new entry record's id.
    pub entry_id: String,
    /// Member admitted.
    pub member_id: String,
    /// Name for the front-desk display.
    pub member_name: String,
    /// The persisted instant (ISO 8601, UTC).
    pub recorded_at: String,
    /// `HH:MM` local time for the "last entry" display.
    pub display_time: String,
}

impl From<CheckInResult> for CheckInResponse {
    fn from(result: CheckInResult) -> Self {
        Self {
            entry_id: result.entry_id.to_string(),
            member_id: result.member_id.to_string(),
            member_name: result.member_name,
            recorded_at: result.recorded_at.to_rfc3339(),
            display_time: result.display_time,
        }
    }
}

//! HTTP DTOs for member endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::member::{Member, ScheduleRestriction};

/// Request to register a member.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMemberRequest {
    pub name: String,
    /// Defaults to unrestricted.
    #[serde(default)]
    pub schedule: ScheduleRestriction,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to update a member. Missing fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub schedule: Option<ScheduleRestriction>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Member details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub schedule: ScheduleRestriction,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: bool,
    pub created_at: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            code: member.code.to_string(),
            schedule: member.schedule,
            phone: member.phone,
            email: member.email,
            active: member.active,
            created_at: member.created_at.to_rfc3339(),
        }
    }
}

/// Response listing members.
#[derive(Debug, Clone, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}

//! Member aggregate entity.
//!
//! A Member is a registered gym client identified at the front desk by a
//! unique 6-digit code. Subscriptions and entry records reference members
//! but are separate aggregates.
//!
//! # Design Decisions
//!
//! - **Code is identity at the desk**: the UUID is the storage key, the
//!   code is what humans type; both are unique
//! - **Display data lives elsewhere**: entries remaining and last entry
//!   time are read-model fields on the roster view, never stored here

use crate::domain::foundation::{MemberId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::{MemberCode, ScheduleRestriction};

/// Member aggregate - a registered gym client.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `code` is unique across members (enforced at the store)
/// - `name` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for this member.
    pub id: MemberId,

    /// Display name.
    pub name: String,

    /// 6-digit front-desk code.
    pub code: MemberCode,

    /// When this member may enter the gym.
    pub schedule: ScheduleRestriction,

    /// Contact phone, if given.
    pub phone: Option<String>,

    /// Contact email, if given.
    pub email: Option<String>,

    /// Whether the member is active in the roster.
    pub active: bool,

    /// When the member was registered.
    pub created_at: Timestamp,

    /// When the member was last updated.
    pub updated_at: Timestamp,
}

impl Member {
    /// Registers a new member.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the name is blank.
    pub fn register(
        id: MemberId,
        name: impl Into<String>,
        code: MemberCode,
        schedule: ScheduleRestriction,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            code,
            schedule,
            phone: None,
            email: None,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Renames the member.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the new name is blank.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.name = name;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Updates contact details. `None` leaves a field unchanged.
    pub fn update_contact(&mut self, phone: Option<String>, email: Option<String>) {
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(email) = email {
            self.email = Some(email);
        }
        self.updated_at = Timestamp::now();
    }

    /// Changes the schedule restriction.
    pub fn set_schedule(&mut self, schedule: ScheduleRestriction) {
        self.schedule = schedule;
        self.updated_at = Timestamp::now();
    }

    /// Deactivates the member without deleting history.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Timestamp::now();
    }

    /// Reactivates the member.
    pub fn reactivate(&mut self) {
        self.active = true;
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_code() -> MemberCode {
        MemberCode::new("123456").unwrap()
    }

    #[test]
    fn register_creates_active_member() {
        let member = Member::register(
            MemberId::new(),
            "Ana Torres",
            test_code(),
            ScheduleRestriction::Unrestricted,
        )
        .unwrap();

        assert!(member.active);
        assert_eq!(member.name, "Ana Torres");
        assert_eq!(member.code.as_str(), "123456");
        assert!(member.phone.is_none());
    }

    #[test]
    fn register_rejects_blank_name() {
        let result = Member::register(
            MemberId::new(),
            "   ",
            test_code(),
            ScheduleRestriction::Unrestricted,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rename_rejects_blank_name() {
        let mut member = Member::register(
            MemberId::new(),
            "Ana Torres",
            test_code(),
            ScheduleRestriction::Unrestricted,
        )
        .unwrap();

        assert!(member.rename("").is_err());
        assert_eq!(member.name, "Ana Torres");
    }

    #[test]
    fn update_contact_leaves_missing_fields_unchanged() {
        let mut member = Member::register(
            MemberId::new(),
            "Ana Torres",
            test_code(),
            ScheduleRestriction::Unrestricted,
        )
        .unwrap();

        member.update_contact(Some("555-0101".to_string()), None);
        member.update_contact(None, Some("ana@example.com".to_string()));

        assert_eq!(member.phone.as_deref(), Some("555-0101"));
        assert_eq!(member.email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn deactivate_and_reactivate_toggle_active() {
        let mut member = Member::register(
            MemberId::new(),
            "Ana Torres",
            test_code(),
            ScheduleRestriction::MorningsOnly,
        )
        .unwrap();

        member.deactivate();
        assert!(!member.active);
        member.reactivate();
        assert!(member.active);
    }
}

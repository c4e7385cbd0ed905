//! RegisterMemberHandler - Command handler for registering a new member.
//!
//! Allocates a unique 6-digit code by generating and retrying on
//! collision; the store's unique constraint is the final arbiter.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::{Member, MemberCode, ScheduleRestriction};
use crate::ports::MemberRepository;

/// How many random codes to try before giving up.
///
/// Collisions are rare (one in a million per try at typical rosters);
/// hitting this limit means something is wrong with the store.
const MAX_CODE_ATTEMPTS: u32 = 16;

/// Command to register a member.
#[derive(Debug, Clone)]
pub struct RegisterMemberCommand {
    pub name: String,
    pub schedule: ScheduleRestriction,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Result of registering a member.
#[derive(Debug, Clone)]
pub struct RegisterMemberResult {
    pub member: Member,
}

/// Handler for member registration.
pub struct RegisterMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl RegisterMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(
        &self,
        cmd: RegisterMemberCommand,
    ) -> Result<RegisterMemberResult, DomainError> {
        let code = self.allocate_code().await?;

        let mut member = Member::register(MemberId::new(), cmd.name, code, cmd.schedule)?;
        member.update_contact(cmd.phone, cmd.email);

        self.members.save(&member).await?;
        info!(member = %member.name, code = %member.code, "member registered");

        Ok(RegisterMemberResult { member })
    }

    async fn allocate_code(&self) -> Result<MemberCode, DomainError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = MemberCode::generate();
            if self.members.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }
        Err(DomainError::new(
            ErrorCode::CodeAllocationFailed,
            "Could not allocate an unused member code",
        ))
    }
}

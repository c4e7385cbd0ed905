//! ListMembersHandler / GetMemberHandler - member read queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::Member;
use crate::ports::MemberRepository;

/// Handler listing all members.
pub struct ListMembersHandler {
    members: Arc<dyn MemberRepository>,
}

impl ListMembersHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self) -> Result<Vec<Member>, DomainError> {
        self.members.list().await
    }
}

/// Query for one member by id.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub member_id: MemberId,
}

/// Handler fetching one member.
pub struct GetMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl GetMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<Member, DomainError> {
        self.members
            .find_by_id(&query.member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MemberNotFound,
                    format!("No member with id {}", query.member_id),
                )
            })
    }
}

//! UpdateMemberHandler - Command handler for editing a member.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::member::{Member, ScheduleRestriction};
use crate::ports::MemberRepository;

/// Command to update a member. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberCommand {
    pub member_id: MemberId,
    pub name: Option<String>,
    pub schedule: Option<ScheduleRestriction>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

/// Handler for member updates.
pub struct UpdateMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl UpdateMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: UpdateMemberCommand) -> Result<Member, DomainError> {
        let mut member = self
            .members
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MemberNotFound,
                    format!("No member with id {}", cmd.member_id),
                )
            })?;

        if let Some(name) = cmd.name {
            member.rename(name)?;
        }
        if let Some(schedule) = cmd.schedule {
            member.set_schedule(schedule);
        }
        member.update_contact(cmd.phone, cmd.email);
        match cmd.active {
            Some(true) => member.reactivate(),
            Some(false) => member.deactivate(),
            None => {}
        }

        self.members.update(&member).await?;
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMemberRepository {
        members: Mutex<Vec<Member>>,
    }

    impl MockMemberRepository {
        fn with(member: Member) -> Self {
            Self {
                members: Mutex::new(vec![member]),
            }
        }
    }

    #[async_trait]
    impl MemberRepository for MockMemberRepository {
        async fn save(&self, member: &Member) -> Result<(), DomainError> {
            self.members.lock().unwrap().push(member.clone());
            Ok(())
        }

        async fn update(&self, member: &Member) -> Result<(), DomainError> {
            let mut members = self.members.lock().unwrap();
            if let Some(pos) = members.iter().position(|m| m.id == member.id) {
                members[pos] = member.clone();
                Ok(())
            } else {
                Err(DomainError::new(
                    ErrorCode::MemberNotFound,
                    "Member not found",
                ))
            }
        }

        async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
            Ok(self
                .members
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.id == id)
                .cloned())
        }

        async fn find_by_code(
            &self,
            code: &MemberCode,
        ) -> Result<Option<Member>, DomainError> {
            Ok(self
                .members
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.code == code)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<Member>, DomainError> {
            Ok(self.members.lock().unwrap().clone())
        }

        async fn delete(&self, _id: &MemberId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn seeded_member() -> Member {
        Member::register(
            MemberId::new(),
            "Ana Torres",
            MemberCode::new("123456").unwrap(),
            ScheduleRestriction::Unrestricted,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn updates_only_the_given_fields() {
        let member = seeded_member();
        let id = member.id;
        let repo = Arc::new(MockMemberRepository::with(member));
        let handler = UpdateMemberHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateMemberCommand {
                member_id: id,
                schedule: Some(ScheduleRestriction::MorningsOnly),
                active: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Ana Torres");
        assert_eq!(updated.schedule, ScheduleRestriction::MorningsOnly);
        assert!(!updated.active);
    }

    #[tokio::test]
    async fn fails_for_unknown_member() {
        let repo = Arc::new(MockMemberRepository::with(seeded_member()));
        let handler = UpdateMemberHandler::new(repo);

        let result = handler
            .handle(UpdateMemberCommand {
                member_id: MemberId::new(),
                name: Some("Someone Else".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::MemberNotFound);
    }
}

//! HTTP handlers for member endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::member::{
    GetMemberHandler, GetMemberQuery, ListMembersHandler, RegisterMemberCommand,
    RegisterMemberHandler, UpdateMemberCommand, UpdateMemberHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::ports::MemberRepository;

use super::dto::{
    MemberListResponse, MemberResponse, RegisterMemberRequest, UpdateMemberRequest,
};

/// Shared state for member endpoints.
#[derive(Clone)]
pub struct MembersAppState {
    pub member_repository: Arc<dyn MemberRepository>,
}

impl MembersAppState {
    pub fn register_handler(&self) -> RegisterMemberHandler {
        RegisterMemberHandler::new(self.member_repository.clone())
    }

    pub fn update_handler(&self) -> UpdateMemberHandler {
        UpdateMemberHandler::new(self.member_repository.clone())
    }

    pub fn list_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.member_repository.clone())
    }

    pub fn get_handler(&self) -> GetMemberHandler {
        GetMemberHandler::new(self.member_repository.clone())
    }
}

fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("'{}' is not a valid member id", raw),
        ))
    })
}

/// POST /api/members - register a member
pub async fn register_member(
    State(state): State<MembersAppState>,
    Json(request): Json<RegisterMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.register_handler();
    let result = handler
        .handle(RegisterMemberCommand {
            name: request.name,
            schedule: request.schedule,
            phone: request.phone,
            email: request.email,
        })
        .await?;

    Ok(Json(MemberResponse::from(result.member)))
}

/// GET /api/members - list members
pub async fn list_members(
    State(state): State<MembersAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let members = state.list_handler().handle().await?;
    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MemberResponse::from).collect(),
    }))
}

/// GET /api/members/:id - fetch one member
pub async fn get_member(
    State(state): State<MembersAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let member = state
        .get_handler()
        .handle(GetMemberQuery { member_id })
        .await?;
    Ok(Json(MemberResponse::from(member)))
}

/// PUT /api/members/:id - update a member
pub async fn update_member(
    State(state): State<MembersAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let member = state
        .update_handler()
        .handle(UpdateMemberCommand {
            member_id,
            name: request.name,
            schedule: request.schedule,
            phone: request.phone,
            email: request.email,
            active: request.active,
        })
        .await?;
    Ok(Json(MemberResponse::from(member)))
}

//! Members HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{MemberListResponse, MemberResponse, RegisterMemberRequest, UpdateMemberRequest};
pub use handlers::MembersAppState;
pub use routes::members_routes;

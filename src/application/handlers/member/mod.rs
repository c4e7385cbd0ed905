//! Member management handlers.

mod list_members;
mod register_member;
mod update_member;

pub use list_members::{GetMemberHandler, GetMemberQuery, ListMembersHandler};
pub use register_member::{RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult};
pub use update_member::{UpdateMemberCommand, UpdateMemberHandler};

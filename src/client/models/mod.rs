//! monday.com API data models
//!
//! GraphQL records (users, teams) and SCIM resources (users, groups) are
//! kept separate: the two APIs use different identifier spaces.

mod scim;
mod team;
mod user;

pub use scim::{
    ListResponse, PATCH_OP_SCHEMA, PatchOperation, PatchRequest, ScimEmail, ScimGroup,
    ScimGroupMember, ScimMeta, ScimName, ScimUser,
};
pub use team::{Team, TeamUser};
pub use user::User;

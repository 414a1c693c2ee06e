//! SCIM API trait

use async_trait::async_trait;

use crate::client::models::{ListResponse, ScimGroup, ScimUser};
use crate::client::pagination::ScimPageParams;
use crate::error::Result;

/// Provisioning operations served by the SCIM endpoints
#[async_trait]
pub trait ScimApi: Send + Sync {
    /// Fetch one page of `/Users`.
    async fn list_users_page(&self, page: &ScimPageParams) -> Result<ListResponse<ScimUser>>;

    /// Fetch one page of `/Groups`, including groups not provisioned via SCIM.
    async fn list_groups_page(&self, page: &ScimPageParams) -> Result<ListResponse<ScimGroup>>;

    /// Replace a user's `userType` with a single PATCH.
    ///
    /// Succeeds only on HTTP 200; any other status is returned as an error
    /// carrying the status code and response body.
    async fn set_user_type(&self, user_id: &str, user_type: &str) -> Result<()>;
}

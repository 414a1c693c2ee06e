//! GraphQL API trait

use async_trait::async_trait;

use crate::client::models::{Team, User};
use crate::error::Result;

/// Read operations served by the GraphQL endpoint.
///
/// Each call is a single POST; a response carrying `errors` fails the call.
#[async_trait]
pub trait GraphQlApi: Send + Sync {
    /// All account users with activity timestamps.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// All teams with their members.
    async fn list_teams(&self) -> Result<Vec<Team>>;
}

//! Mock monday.com API client for testing
//!
//! Serves canned GraphQL records and SCIM resources from memory, paginating
//! SCIM lists the way the real endpoints do, and records every call so tests
//! can assert on request sequences.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{GraphQlApi, ScimApi};
use super::models::{ListResponse, ScimGroup, ScimUser, Team, User};
use super::pagination::ScimPageParams;
use crate::error::{ApiError, Result};

/// A request observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListUsers,
    ListTeams,
    ScimUsersPage { start_index: usize, count: usize },
    ScimGroupsPage { start_index: usize, count: usize },
    SetUserType { user_id: String, user_type: String },
}

/// Mock API client.
///
/// # Example
/// ```ignore
/// let mock = MockMondayClient::new().with_users(vec![user]);
/// let users = mock.list_users().await?;
/// ```
#[derive(Default)]
pub struct MockMondayClient {
    users: Vec<User>,
    teams: Vec<Team>,
    scim_users: Vec<ScimUser>,
    scim_groups: Vec<ScimGroup>,
    /// Error returned by the next GraphQL call
    graphql_error: Arc<Mutex<Option<ApiError>>>,
    /// Fail SCIM list pages whose start index is at or after this value
    fail_scim_from: Option<usize>,
    /// Per-user PATCH failures (status, body)
    patch_failures: HashMap<String, (u16, String)>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockMondayClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_scim_users(mut self, users: Vec<ScimUser>) -> Self {
        self.scim_users = users;
        self
    }

    pub fn with_scim_groups(mut self, groups: Vec<ScimGroup>) -> Self {
        self.scim_groups = groups;
        self
    }

    pub fn with_graphql_error(self, error: ApiError) -> Self {
        *self.graphql_error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub fn failing_scim_from(mut self, start_index: usize) -> Self {
        self.fail_scim_from = Some(start_index);
        self
    }

    pub fn with_patch_failure(mut self, user_id: &str, status: u16, body: &str) -> Self {
        self.patch_failures
            .insert(user_id.to_string(), (status, body.to_string()));
        self
    }

    /// All calls made so far, in order
    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: MockCall) {
        self.calls.lock().await.push(call);
    }

    async fn take_graphql_error(&self) -> Result<()> {
        match self.graphql_error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn page_of<T: Clone>(&self, all: &[T], page: &ScimPageParams) -> Result<ListResponse<T>> {
        if let Some(from) = self.fail_scim_from {
            if page.start_index >= from {
                return Err(ApiError::Status {
                    status: 500,
                    body: "internal error".to_string(),
                }
                .into());
            }
        }

        let skip = page.start_index.saturating_sub(1);
        let resources: Vec<T> = all.iter().skip(skip).take(page.count).cloned().collect();
        Ok(ListResponse {
            total_results: all.len(),
            start_index: Some(page.start_index),
            items_per_page: Some(resources.len()),
            resources,
        })
    }
}

#[async_trait]
impl GraphQlApi for MockMondayClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.record(MockCall::ListUsers).await;
        self.take_graphql_error().await?;
        Ok(self.users.clone())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        self.record(MockCall::ListTeams).await;
        self.take_graphql_error().await?;
        Ok(self.teams.clone())
    }
}

#[async_trait]
impl ScimApi for MockMondayClient {
    async fn list_users_page(&self, page: &ScimPageParams) -> Result<ListResponse<ScimUser>> {
        self.record(MockCall::ScimUsersPage {
            start_index: page.start_index,
            count: page.count,
        })
        .await;
        self.page_of(&self.scim_users, page)
    }

    async fn list_groups_page(&self, page: &ScimPageParams) -> Result<ListResponse<ScimGroup>> {
        self.record(MockCall::ScimGroupsPage {
            start_index: page.start_index,
            count: page.count,
        })
        .await;
        self.page_of(&self.scim_groups, page)
    }

    async fn set_user_type(&self, user_id: &str, user_type: &str) -> Result<()> {
        self.record(MockCall::SetUserType {
            user_id: user_id.to_string(),
            user_type: user_type.to_string(),
        })
        .await;

        match self.patch_failures.get(user_id) {
            Some((status, body)) => Err(ApiError::Status {
                status: *status,
                body: body.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

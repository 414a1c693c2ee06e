//! monday.com API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{GraphQlApi, ScimApi};
use super::models::{ListResponse, PatchRequest, ScimGroup, ScimUser, Team, User};
use super::pagination::ScimPageParams;
use crate::config::Token;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Default GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2";

/// Client-side request quota per second
const RATE_LIMIT_PER_SECOND: u32 = 5;

const USERS_QUERY: &str = "query { users { id name email created_at last_activity enabled } }";

const TEAMS_QUERY: &str =
    "query { teams { id name picture_url users { id name email created_at phone } } }";

/// SCIM base URL for an account subdomain.
pub fn scim_url_for_domain(domain: &str) -> String {
    format!("https://{}.monday.com/scim/v2", domain.trim())
}

/// URL of one SCIM user. The id is percent-encoded as a single path segment.
pub fn scim_user_url(scim_base: &str, user_id: &str) -> Result<Url> {
    if matches!(user_id, "" | "." | "..") {
        return Err(Error::Other(format!("invalid user id {:?}", user_id)));
    }

    let mut url = Url::parse(scim_base)
        .map_err(|e| ConfigError::Invalid(format!("invalid SCIM URL {}: {}", scim_base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ConfigError::Invalid(format!("invalid SCIM URL {}", scim_base)))?
        .pop_if_empty()
        .push("Users")
        .push(user_id);
    Ok(url)
}

/// monday.com API client covering the GraphQL and SCIM endpoints
pub struct MondayClient {
    http: HttpClient,
    token: Token,
    api_url: String,
    scim_url: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

/// Top-level GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    /// `Some` whenever the key is present, even as `null`
    #[serde(default, deserialize_with = "present")]
    errors: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl MondayClient {
    /// Create a new client.
    ///
    /// `scim_url` may be `None` for commands that only use GraphQL; SCIM
    /// calls then fail with a configuration error.
    pub fn new(token: Token, api_url: Option<String>, scim_url: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            token,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            scim_url: scim_url.map(|u| u.trim_end_matches('/').to_string()),
            rate_limiter,
        })
    }

    /// GraphQL endpoint in use
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn scim_base(&self) -> Result<&str> {
        self.scim_url
            .as_deref()
            .ok_or_else(|| ConfigError::Missing("domain").into())
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(self.token.expose())
            .header("Accept", "application/json")
    }

    /// Send a request and return the body of a 200 response.
    async fn send(&self, builder: RequestBuilder) -> Result<String> {
        self.rate_limiter.until_ready().await;

        let response = self.authorized(builder).send().await.map_err(ApiError::from)?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response.text().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to read response: {}", e))
        })?;

        debug!("Response status {}", status);

        if status != StatusCode::OK {
            return Err(ApiError::from_status(status, body, retry_after).into());
        }

        Ok(body)
    }

    /// Run a GraphQL query and return its `data` payload.
    async fn graphql<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        debug!("POST {} (GraphQL)", self.api_url);

        let request = self
            .http
            .post(&self.api_url)
            .json(&serde_json::json!({ "query": query }));
        let body = self.send(request).await?;

        let envelope: GraphQlResponse<T> = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse GraphQL response: {}", e))
        })?;

        if let Some(errors) = envelope.errors {
            return Err(ApiError::GraphQl(errors.to_string()).into());
        }

        envelope
            .data
            .ok_or_else(|| ApiError::InvalidResponse("GraphQL response has no data".to_string()).into())
    }

    async fn scim_list<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&'static str, String)],
        page: &ScimPageParams,
    ) -> Result<ListResponse<T>> {
        let url = format!("{}{}", self.scim_base()?, path);
        debug!("GET {} startIndex={}", url, page.start_index);

        let mut query = extra.to_vec();
        query.extend(page.to_query_params());

        let body = self.send(self.http.get(&url).query(&query)).await?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse SCIM list response: {}", e)).into()
        })
    }
}

#[async_trait]
impl GraphQlApi for MondayClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        #[derive(Deserialize)]
        struct UsersData {
            #[serde(default)]
            users: Option<Vec<User>>,
        }

        let data: UsersData = self.graphql(USERS_QUERY).await?;
        Ok(data.users.unwrap_or_default())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        #[derive(Deserialize)]
        struct TeamsData {
            #[serde(default)]
            teams: Option<Vec<Team>>,
        }

        let data: TeamsData = self.graphql(TEAMS_QUERY).await?;
        Ok(data.teams.unwrap_or_default())
    }
}

#[async_trait]
impl ScimApi for MondayClient {
    async fn list_users_page(&self, page: &ScimPageParams) -> Result<ListResponse<ScimUser>> {
        self.scim_list("/Users", &[], page).await
    }

    async fn list_groups_page(&self, page: &ScimPageParams) -> Result<ListResponse<ScimGroup>> {
        self.scim_list(
            "/Groups",
            &[("scim_provisioned_only", "false".to_string())],
            page,
        )
        .await
    }

    async fn set_user_type(&self, user_id: &str, user_type: &str) -> Result<()> {
        let url = scim_user_url(self.scim_base()?, user_id)?;
        debug!("PATCH {}", url);

        let request = self
            .http
            .patch(url)
            .json(&PatchRequest::set_user_type(user_type));
        self.send(request).await?;
        Ok(())
    }
}

//! SCIM 2.0 resource models (RFC 7643 / RFC 7644)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Schema URN carried by every PATCH request body
pub const PATCH_OP_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:PatchOp";

/// Identifier sent as either a JSON string or a number.
fn id_from_value<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected string or number id, got {}", other))),
    }
}

fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    id_from_value(Value::deserialize(deserializer)?)
}

fn required_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    id_from_value::<D::Error>(Value::deserialize(deserializer)?)?
        .ok_or_else(|| serde::de::Error::custom("id must not be null"))
}

/// One page of a SCIM list query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Total matching resources across all pages
    #[serde(rename = "totalResults", default)]
    pub total_results: usize,

    #[serde(rename = "startIndex", default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    #[serde(rename = "itemsPerPage", default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<usize>,

    /// Resources on this page
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
}

/// SCIM group, which monday.com exposes for teams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimGroup {
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<String>,

    /// Vendor-internal team id; may be a string or a number
    #[serde(default)]
    pub internal_id: Option<Value>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub members: Option<Vec<ScimGroupMember>>,
}

impl ScimGroup {
    /// Identifier for export: `internalId`, falling back to the SCIM `id`.
    pub fn team_id(&self) -> String {
        match &self.internal_id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => self.id.clone().unwrap_or_default(),
        }
    }

    pub fn members(&self) -> &[ScimGroupMember] {
        self.members.as_deref().unwrap_or_default()
    }
}

/// Member reference inside a SCIM group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScimGroupMember {
    /// Referenced user id
    #[serde(default, deserialize_with = "opt_id")]
    pub value: Option<String>,

    /// Member display name
    #[serde(default)]
    pub display: Option<String>,
}

/// SCIM user resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimUser {
    #[serde(deserialize_with = "required_id")]
    pub id: String,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub name: Option<ScimName>,

    #[serde(default)]
    pub emails: Option<Vec<ScimEmail>>,

    #[serde(default)]
    pub active: Option<bool>,

    #[serde(default)]
    pub meta: Option<ScimMeta>,
}

impl ScimUser {
    /// Best available human-readable name.
    pub fn best_name(&self) -> Option<String> {
        if let Some(display) = self.display_name.as_ref().filter(|s| !s.is_empty()) {
            return Some(display.clone());
        }

        let joined = self.name.as_ref().map(|n| {
            [n.given_name.as_deref(), n.family_name.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        });

        match joined {
            Some(full) if !full.is_empty() => Some(full),
            _ => self.user_name.clone(),
        }
    }

    /// Primary email, else the first listed, else the user name.
    pub fn best_email(&self) -> Option<String> {
        let emails = self.emails.as_deref().unwrap_or_default();
        emails
            .iter()
            .find(|e| e.primary == Some(true))
            .or_else(|| emails.first())
            .and_then(|e| e.value.clone())
            .or_else(|| self.user_name.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimName {
    #[serde(default)]
    pub given_name: Option<String>,

    #[serde(default)]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScimEmail {
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub primary: Option<bool>,
}

/// Resource metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScimMeta {
    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub last_modified: Option<String>,
}

/// SCIM PATCH request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchRequest {
    pub schemas: Vec<String>,

    #[serde(rename = "Operations")]
    pub operations: Vec<PatchOperation>,
}

/// Single PATCH operation; only `replace` is issued by this tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Replace {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        value: Value,
    },
}

impl PatchRequest {
    /// Body that replaces a user's `userType`.
    pub fn set_user_type(user_type: &str) -> Self {
        Self {
            schemas: vec![PATCH_OP_SCHEMA.to_string()],
            operations: vec![PatchOperation::Replace {
                path: None,
                value: serde_json::json!({ "userType": user_type }),
            }],
        }
    }
}

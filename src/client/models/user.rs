//! GraphQL user model

use serde::{Deserialize, Serialize};

/// Account user as returned by the `users` GraphQL query.
///
/// Only `id` is guaranteed; every other field depends on what the query
/// selected and what the account has filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,

    /// Account creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last activity timestamp (ISO 8601)
    #[serde(default)]
    pub last_activity: Option<String>,

    /// Whether the account is enabled
    #[serde(default)]
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_user() {
        let json = r#"{
            "id": "4012",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "created_at": "2024-01-02T03:04:05Z",
            "last_activity": "2024-06-01T00:00:00Z",
            "enabled": true
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "4012");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.enabled, Some(true));
    }

    #[test]
    fn test_deserialize_sparse_user() {
        let user: User = serde_json::from_str(r#"{"id": "1", "last_activity": null}"#).unwrap();
        assert_eq!(user.id, "1");
        assert!(user.name.is_none());
        assert!(user.last_activity.is_none());
    }
}

//! GraphQL team models

use serde::{Deserialize, Serialize};

/// Team as returned by the `teams` GraphQL query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: String,

    /// Team name
    #[serde(default)]
    pub name: Option<String>,

    /// Team picture URL
    #[serde(default)]
    pub picture_url: Option<String>,

    /// Team members, in API order
    #[serde(default)]
    pub users: Option<Vec<TeamUser>>,
}

impl Team {
    /// Members of the team; a null or missing list is empty.
    pub fn members(&self) -> &[TeamUser] {
        self.users.as_deref().unwrap_or_default()
    }
}

/// Member of a team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamUser {
    /// User ID
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

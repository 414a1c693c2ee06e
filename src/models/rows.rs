//! CSV row mapping for exports
//!
//! Each export declares its header as a literal and maps API records onto
//! cells in that order. Absent values become empty cells.

use crate::client::models::{ScimGroup, ScimUser, Team, User};
use crate::error::Result;
use crate::output::CsvDocument;
use crate::output::csv::cell;

/// Columns of the user exports
pub const USER_COLUMNS: [&str; 5] = ["id", "name", "email", "created_at", "last_activity"];

/// Optional trailing column of the user exports
pub const ENABLED_COLUMN: &str = "enabled";

/// Columns of the SCIM team export
pub const SCIM_TEAM_COLUMNS: [&str; 2] = ["SCIM Team ID", "Team Name"];

/// Optional trailing column of the SCIM team export
pub const SCIM_MEMBERS_COLUMN: &str = "Team Members";

/// Separator between member names in the SCIM team export
pub const MEMBER_SEPARATOR: &str = "; ";

/// Columns of the standard (GraphQL) team export, one row per member
pub const TEAM_MEMBER_COLUMNS: [&str; 8] = [
    "Team ID",
    "Team Name",
    "Picture URL",
    "User ID",
    "User Name",
    "User Email",
    "User Created At",
    "User Phone",
];

/// One user, flattened to export cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub last_activity: String,
    pub enabled: String,
}

impl UserRow {
    fn cells(self, include_enabled: bool) -> Vec<String> {
        let mut cells = vec![
            self.id,
            self.name,
            self.email,
            self.created_at,
            self.last_activity,
        ];
        if include_enabled {
            cells.push(self.enabled);
        }
        cells
    }
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: cell(user.name),
            email: cell(user.email),
            created_at: cell(user.created_at),
            last_activity: cell(user.last_activity),
            enabled: cell(user.enabled),
        }
    }
}

impl From<ScimUser> for UserRow {
    fn from(user: ScimUser) -> Self {
        let name = cell(user.best_name());
        let email = cell(user.best_email());
        let meta = user.meta.unwrap_or_default();
        Self {
            id: user.id,
            name,
            email,
            created_at: cell(meta.created),
            last_activity: cell(meta.last_modified),
            enabled: cell(user.active),
        }
    }
}

/// Build the user export document.
pub fn users_document<R>(rows: R, include_enabled: bool) -> Result<CsvDocument>
where
    R: IntoIterator,
    R::Item: Into<UserRow>,
{
    let mut header = USER_COLUMNS.to_vec();
    if include_enabled {
        header.push(ENABLED_COLUMN);
    }

    let mut doc = CsvDocument::new(&header);
    for row in rows {
        let row: UserRow = row.into();
        doc.push_row(row.cells(include_enabled))?;
    }
    Ok(doc)
}

/// Build the SCIM team export: one row per group.
pub fn scim_teams_document(groups: &[ScimGroup], include_members: bool) -> Result<CsvDocument> {
    let mut header = SCIM_TEAM_COLUMNS.to_vec();
    if include_members {
        header.push(SCIM_MEMBERS_COLUMN);
    }

    let mut doc = CsvDocument::new(&header);
    for group in groups {
        let mut row = vec![group.team_id(), cell(group.display_name.as_deref())];
        if include_members {
            let members = group
                .members()
                .iter()
                .map(|m| m.display.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(MEMBER_SEPARATOR);
            row.push(members);
        }
        doc.push_row(row)?;
    }
    Ok(doc)
}

/// Build the standard team export: one row per (team, member) pair.
///
/// Teams without members contribute no rows.
pub fn team_members_document(teams: &[Team]) -> Result<CsvDocument> {
    let mut doc = CsvDocument::new(&TEAM_MEMBER_COLUMNS);
    for team in teams {
        for user in team.members() {
            doc.push_row(vec![
                team.id.clone(),
                cell(team.name.as_deref()),
                cell(team.picture_url.as_deref()),
                user.id.clone(),
                cell(user.name.as_deref()),
                cell(user.email.as_deref()),
                cell(user.created_at.as_deref()),
                cell(user.phone.as_deref()),
            ])?;
        }
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{ScimEmail, ScimGroupMember, ScimMeta, TeamUser};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: Some(format!("User {}", id)),
            email: Some(format!("{}@example.com", id)),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            last_activity: None,
            enabled: Some(true),
        }
    }

    fn member(id: &str, name: &str) -> TeamUser {
        TeamUser {
            id: id.to_string(),
            name: Some(name.to_string()),
            email: Some(format!("{}@example.com", id)),
            created_at: Some("2024-03-01".to_string()),
            phone: None,
        }
    }

    fn group(id: &str, name: &str, members: &[&str]) -> ScimGroup {
        ScimGroup {
            id: Some(id.to_string()),
            internal_id: None,
            display_name: Some(name.to_string()),
            members: Some(
                members
                    .iter()
                    .map(|m| ScimGroupMember {
                        value: None,
                        display: Some(m.to_string()),
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_users_document_row_per_user() {
        let doc = users_document(vec![user("1"), user("2"), user("3")], false).unwrap();
        assert_eq!(doc.header(), USER_COLUMNS);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.rows()[0][0], "1");
        assert_eq!(doc.rows()[0][4], "");
    }

    #[test]
    fn test_users_document_with_enabled() {
        let doc = users_document(vec![user("1")], true).unwrap();
        assert_eq!(doc.header().last().map(String::as_str), Some("enabled"));
        assert_eq!(doc.rows()[0].len(), 6);
        assert_eq!(doc.rows()[0][5], "true");
    }

    #[test]
    fn test_scim_user_row_mapping() {
        let scim = ScimUser {
            id: "u-9".to_string(),
            user_name: Some("ada@example.com".to_string()),
            display_name: Some("Ada".to_string()),
            emails: Some(vec![ScimEmail {
                value: Some("ada@work.example".to_string()),
                primary: Some(true),
            }]),
            active: Some(false),
            meta: Some(ScimMeta {
                created: Some("2023-05-05".to_string()),
                last_modified: Some("2024-05-05".to_string()),
            }),
            ..Default::default()
        };

        let row = UserRow::from(scim);
        assert_eq!(row.name, "Ada");
        assert_eq!(row.email, "ada@work.example");
        assert_eq!(row.created_at, "2023-05-05");
        assert_eq!(row.last_activity, "2024-05-05");
        assert_eq!(row.enabled, "false");
    }

    #[test]
    fn test_scim_user_without_meta_has_empty_timestamps() {
        let row = UserRow::from(ScimUser {
            id: "u-1".to_string(),
            ..Default::default()
        });
        assert_eq!(row.created_at, "");
        assert_eq!(row.last_activity, "");
        assert_eq!(row.enabled, "");
    }

    #[test]
    fn test_scim_teams_with_members_empty_team_has_empty_cell() {
        let groups = vec![
            group("g1", "Platform", &["Ada", "Bob"]),
            group("g2", "Empty", &[]),
        ];

        let doc = scim_teams_document(&groups, true).unwrap();
        assert_eq!(
            doc.header(),
            ["SCIM Team ID", "Team Name", "Team Members"]
        );
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.rows()[0][2], "Ada; Bob");
        assert_eq!(doc.rows()[1][2], "");
    }

    #[test]
    fn test_scim_teams_without_members_column() {
        let groups = vec![group("g1", "Platform", &["Ada"])];
        let doc = scim_teams_document(&groups, false).unwrap();
        assert_eq!(doc.header(), SCIM_TEAM_COLUMNS);
        assert_eq!(doc.rows()[0], vec!["g1".to_string(), "Platform".to_string()]);
    }

    #[test]
    fn test_scim_team_member_without_display_is_blank() {
        let mut g = group("g1", "Ops", &["Ada"]);
        if let Some(members) = g.members.as_mut() {
            members.push(ScimGroupMember::default());
        }
        let doc = scim_teams_document(&[g], true).unwrap();
        assert_eq!(doc.rows()[0][2], "Ada; ");
    }

    #[test]
    fn test_team_members_row_per_pair() {
        let teams = vec![
            Team {
                id: "10".to_string(),
                name: Some("Platform".to_string()),
                picture_url: Some("https://cdn.example/p.png".to_string()),
                users: Some(vec![member("1", "Ada"), member("2", "Bob")]),
            },
            Team {
                id: "11".to_string(),
                name: Some("Empty".to_string()),
                picture_url: None,
                users: Some(vec![]),
            },
            Team {
                id: "12".to_string(),
                name: None,
                picture_url: None,
                users: Some(vec![member("3", "Cy")]),
            },
        ];

        let doc = team_members_document(&teams).unwrap();
        assert_eq!(doc.header(), TEAM_MEMBER_COLUMNS);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.rows()[1][3], "2");
        assert_eq!(doc.rows()[2][1], "");
        assert_eq!(doc.rows()[2][2], "");
        assert!(doc.rows().iter().all(|r| r.len() == TEAM_MEMBER_COLUMNS.len()));
    }
}

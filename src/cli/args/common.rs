//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-oriented messages
    #[default]
    Pretty,
    /// Table format - one row per result
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// API used to source user records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UserSource {
    /// GraphQL `users` query (includes last activity)
    #[default]
    Graphql,
    /// SCIM `/Users` listing, paginated
    Scim,
}

impl UserSource {
    /// Default export file for this source
    pub fn default_output(&self) -> &'static str {
        match self {
            UserSource::Graphql => "users.csv",
            UserSource::Scim => "monday_users.csv",
        }
    }
}

//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence for every value: CLI flag > environment variable > config file
/// > interactive prompt. This struct captures the flag/env layer; the rest is
/// resolved in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.mondayop/config.yaml)
    pub config: Option<String>,

    /// Path to the API token file
    pub token_file: Option<String>,

    /// Account subdomain used to build the SCIM URL
    pub domain: Option<String>,

    /// GraphQL endpoint override
    pub api_url: Option<String>,

    /// SCIM base URL override
    pub scim_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            token_file: cli.token_file.clone(),
            domain: cli.domain.clone(),
            api_url: cli.api_url.clone(),
            scim_url: cli.scim_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

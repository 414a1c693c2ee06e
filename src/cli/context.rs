//! Command execution context
//!
//! Resolves configuration, the API token and endpoint URLs once per command
//! so handlers only deal with their own work.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::prompt::value_or_prompt;
use crate::client::{MondayClient, scim_url_for_domain};
use crate::config::token::expand_home;
use crate::config::{Config, Token, load_token};
use crate::error::{ConfigError, Result};

/// Context for command execution: loaded config plus the global flags.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Flags and environment overrides
    pub opts: GlobalOptions,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config from the override path or the default location.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        Ok(Self::with_config(opts, config))
    }

    pub fn with_config(opts: &GlobalOptions, config: Config) -> Self {
        Self {
            config,
            opts: opts.clone(),
            format: opts.format,
        }
    }

    /// Read the bearer token: flag > config > prompt.
    pub fn token(&self) -> Result<Token> {
        let path = value_or_prompt(
            self.opts
                .token_file
                .clone()
                .or_else(|| self.config.token_path.clone()),
            "token file",
            "Path to your monday.com API token file",
        )?;

        debug!("Reading API token from {}", path);
        load_token(expand_home(&path))
    }

    /// GraphQL endpoint override: flag > config.
    pub fn api_url(&self) -> Option<String> {
        self.opts
            .api_url
            .clone()
            .or_else(|| self.config.api_url.clone())
    }

    /// SCIM base URL: explicit URL (flag > config), else derived from the
    /// domain (flag > config > prompt).
    pub fn scim_url(&self) -> Result<String> {
        if let Some(url) = self
            .opts
            .scim_url
            .clone()
            .or_else(|| self.config.scim_url.clone())
        {
            return Ok(url);
        }

        let domain = value_or_prompt(
            self.opts.domain.clone().or_else(|| self.config.domain.clone()),
            "domain",
            "Your monday.com domain (the part before .monday.com)",
        )?;
        Ok(scim_url_for_domain(&domain))
    }

    /// Client for GraphQL commands.
    pub fn graphql_client(&self) -> Result<MondayClient> {
        MondayClient::new(self.token()?, self.api_url(), None)
    }

    /// Client for SCIM commands.
    pub fn scim_client(&self) -> Result<MondayClient> {
        let scim_url = self.scim_url()?;
        debug!("Using SCIM endpoint {}", scim_url);
        MondayClient::new(self.token()?, self.api_url(), Some(scim_url))
    }

    /// SCIM page size: flag > config.
    pub fn page_size(&self, flag: Option<usize>) -> Result<usize> {
        let size = flag.unwrap_or(self.config.preferences.page_size);
        if size == 0 {
            return Err(ConfigError::Invalid("page size must be at least 1".to_string()).into());
        }
        Ok(size)
    }

    /// User type for batch patches: flag > config.
    pub fn user_type(&self, flag: Option<String>) -> Result<String> {
        let user_type = flag.unwrap_or_else(|| self.config.preferences.user_type.clone());
        let user_type = user_type.trim();
        if user_type.is_empty() {
            return Err(ConfigError::Invalid("user type must not be empty".to_string()).into());
        }
        Ok(user_type.to_string())
    }
}

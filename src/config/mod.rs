//! Configuration management for mondayop

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Error, Result};

pub mod token;

pub use token::{Token, load_token};

/// Application configuration stored in `~/.mondayop/config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Account subdomain, e.g. `acme` for `acme.monday.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Path to the file holding the API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_path: Option<String>,

    /// GraphQL endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// SCIM base URL override (takes precedence over `domain`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scim_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Items requested per SCIM page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// User type applied by `user set-type` when no flag is given
    #[serde(default = "default_user_type")]
    pub user_type: String,
}

fn default_page_size() -> usize {
    100
}

fn default_user_type() -> String {
    "viewer".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            user_type: default_user_type(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mondayop").join("config.yaml"))
    }

    /// Resolve the config path from an optional override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Ok(config) => Ok(config),
            Err(Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an optional override path.
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Reject values that would make commands misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.preferences.page_size == 0 {
            return Err(ConfigError::Invalid("preferences.page_size must be at least 1".to_string()).into());
        }
        if self.preferences.user_type.trim().is_empty() {
            return Err(ConfigError::Invalid("preferences.user_type must not be empty".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.domain.is_none());
        assert!(config.token_path.is_none());
        assert_eq!(config.preferences.page_size, 100);
        assert_eq!(config.preferences.user_type, "viewer");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            domain: Some("acme".to_string()),
            token_path: Some("/secure/monday.token".to_string()),
            ..Default::default()
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_private_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_or_default_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = Config::load_or_default_at(path.to_str()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_propagates_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "domain: [unterminated").unwrap();

        let err = Config::load_or_default_at(path.to_str()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_partial_preferences_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "domain: acme\npreferences:\n  page_size: 25\n").unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.domain.as_deref(), Some("acme"));
        assert_eq!(config.preferences.page_size, 25);
        assert_eq!(config.preferences.user_type, "viewer");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  page_size: 0\n").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }
}

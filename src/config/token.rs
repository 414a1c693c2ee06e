//! Bearer token loading

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// API bearer token.
///
/// Held in memory only. `Debug` is redacted so the token never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    #[cfg(test)]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Read a token file and strip surrounding whitespace.
pub fn load_token(path: impl AsRef<Path>) -> Result<Token> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::TokenFileNotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    let token = contents.trim();
    if token.is_empty() {
        return Err(ConfigError::EmptyToken(path.to_path_buf()).into());
    }

    Ok(Token(token.to_string()))
}

//! Error types for the mondayop CLI

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for mondayop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("CSV file not found: {}. Please provide a valid file location.", .0.display())]
    CsvNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors.
///
/// Every variant produced from an HTTP response keeps the response body so the
/// user sees exactly what the vendor returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed (401): {0}. Check the token file.")]
    Unauthorized(String),

    #[error("Access denied (403): {0}")]
    Forbidden(String),

    #[error("Resource not found (404): {0}")]
    NotFound(String),

    #[error("Rate limit exceeded (429): {body}{}", retry_hint(.retry_after))]
    RateLimit {
        /// From the `Retry-After` header, when the server sent one
        retry_after: Option<Duration>,
        body: String,
    },

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error in response: {0}")]
    GraphQl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a non-200 response.
    pub fn from_status(status: StatusCode, body: String, retry_after: Option<u64>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(body),
            StatusCode::FORBIDDEN => ApiError::Forbidden(body),
            StatusCode::NOT_FOUND => ApiError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit {
                retry_after: retry_after.map(Duration::from_secs),
                body,
            },
            _ => ApiError::Status {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// HTTP status code carried by this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::RateLimit { .. } => Some(429),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(d) => format!(". Retry after {}s", d.as_secs()),
        None => String::new(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `mondayop init` to set up.")]
    NotFound,

    #[error("Token file not found: {}", .0.display())]
    TokenFileNotFound(PathBuf),

    #[error("Token file is empty: {}", .0.display())]
    EmptyToken(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Missing {0}. Pass it as a flag or set it in the config file.")]
    Missing(&'static str),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_not_found_message() {
        let err = Error::CsvNotFound(PathBuf::from("user_ids.csv"));
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("user_ids.csv"));
    }

    #[test]
    fn test_token_file_not_found_message() {
        let err = ConfigError::TokenFileNotFound(PathBuf::from("/tmp/missing.token"));
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("/tmp/missing.token"));
    }

    #[test]
    fn test_from_status_keeps_body() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            "{\"detail\":\"bad\"}".to_string(),
            None,
        );
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("bad"));
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn test_from_status_unauthorized() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "nope".to_string(), None);
        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert!(err.to_string().contains("token file"));
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn test_from_status_rate_limit_keeps_body() {
        let err = ApiError::from_status(
            StatusCode::TOO_MANY_REQUESTS,
            "Daily limit exceeded".to_string(),
            None,
        );
        match &err {
            ApiError::RateLimit { retry_after, body } => {
                assert_eq!(*retry_after, None);
                assert_eq!(body, "Daily limit exceeded");
            }
            _ => panic!("Expected ApiError::RateLimit"),
        }
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded (429): Daily limit exceeded"
        );
    }

    #[test]
    fn test_from_status_rate_limit_header() {
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string(), Some(7));
        match &err {
            ApiError::RateLimit { retry_after, .. } => {
                assert_eq!(*retry_after, Some(Duration::from_secs(7)));
            }
            _ => panic!("Expected ApiError::RateLimit"),
        }
        assert!(err.to_string().contains("slow down"));
        assert!(err.to_string().contains("Retry after 7s"));
    }

    #[test]
    fn test_graphql_error_message() {
        let err = ApiError::GraphQl("[{\"message\":\"Field 'foo' doesn't exist\"}]".to_string());
        assert!(err.to_string().contains("foo"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_config_error_missing() {
        let err = ConfigError::Missing("domain");
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Forbidden("x".to_string()).into();
        match err {
            Error::Api(ApiError::Forbidden(_)) => (),
            _ => panic!("Expected Error::Api(ApiError::Forbidden)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}

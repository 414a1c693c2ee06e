//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope for JSON output: the payload plus run metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Outcome {
        user_id: String,
        updated: bool,
    }

    #[test]
    fn test_envelope_carries_version() {
        let output = JsonOutput::new(3usize);
        assert_eq!(output.data, 3);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(chrono::DateTime::parse_from_rfc3339(&output.meta.timestamp).is_ok());
    }

    #[test]
    fn test_format_json_outcomes() {
        let outcomes = vec![
            Outcome {
                user_id: "1".to_string(),
                updated: true,
            },
            Outcome {
                user_id: "2".to_string(),
                updated: false,
            },
        ];

        let parsed: serde_json::Value =
            serde_json::from_str(&format_json(&outcomes).unwrap()).unwrap();
        assert_eq!(parsed["data"][0]["user_id"], "1");
        assert_eq!(parsed["data"][1]["updated"], false);
        assert!(parsed["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_json_empty() {
        let outcomes: Vec<Outcome> = vec![];
        assert!(format_json(&outcomes).unwrap().contains("\"data\": []"));
    }
}

//! Command result models for table and JSON output

use serde::Serialize;
use tabled::Tabled;

use crate::error::{ApiError, Error};

/// Result of one export command
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ExportSummary {
    #[tabled(rename = "EXPORT")]
    pub export: String,

    #[tabled(rename = "FILE")]
    pub file: String,

    #[tabled(rename = "ROWS")]
    pub rows: usize,
}

/// Outcome of patching a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PatchResult {
    Updated,
    Failed {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        detail: String,
    },
}

/// Per-row record of a batch patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    /// 1-based data row in the input CSV
    pub row: usize,
    pub user_id: String,
    #[serde(flatten)]
    pub result: PatchResult,
}

impl PatchOutcome {
    pub fn updated(row: usize, user_id: &str) -> Self {
        Self {
            row,
            user_id: user_id.to_string(),
            result: PatchResult::Updated,
        }
    }

    /// Record a failed row, keeping status and body from API errors.
    pub fn failed(row: usize, user_id: &str, err: &Error) -> Self {
        let (status, detail) = match err {
            Error::Api(ApiError::Status { status, body }) => (Some(*status), body.clone()),
            Error::Api(
                ApiError::Unauthorized(body)
                | ApiError::Forbidden(body)
                | ApiError::NotFound(body)
                | ApiError::RateLimit { body, .. },
            ) => (err_status(err), body.clone()),
            other => (err_status(other), other.to_string()),
        };

        Self {
            row,
            user_id: user_id.to_string(),
            result: PatchResult::Failed { status, detail },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, PatchResult::Updated)
    }

    /// Console line for this row
    pub fn message(&self) -> String {
        match &self.result {
            PatchResult::Updated => format!("User {} updated successfully.", self.user_id),
            PatchResult::Failed {
                status: Some(status),
                detail,
            } => format!(
                "Error updating user {}: {} - {}",
                self.user_id, status, detail
            ),
            PatchResult::Failed {
                status: None,
                detail,
            } => format!("Error updating user {}: {}", self.user_id, detail),
        }
    }
}

fn err_status(err: &Error) -> Option<u16> {
    match err {
        Error::Api(api) => api.status_code(),
        _ => None,
    }
}

/// Counts across a batch patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatchSummary {
    pub total: usize,
    pub updated: usize,
    pub failed: usize,
}

impl PatchSummary {
    pub fn from_outcomes(outcomes: &[PatchOutcome]) -> Self {
        let updated = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            updated,
            failed: outcomes.len() - updated,
        }
    }
}

/// Patch outcome display model for table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PatchOutcomeDisplay {
    #[tabled(rename = "ROW")]
    pub row: usize,

    #[tabled(rename = "USER ID")]
    pub user_id: String,

    #[tabled(rename = "RESULT")]
    pub result: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&PatchOutcome> for PatchOutcomeDisplay {
    fn from(outcome: &PatchOutcome) -> Self {
        let (result, status, detail) = match &outcome.result {
            PatchResult::Updated => ("updated", "200".to_string(), String::new()),
            PatchResult::Failed { status, detail } => (
                "failed",
                status.map(|s| s.to_string()).unwrap_or_else(|| "--".to_string()),
                detail.clone(),
            ),
        };

        Self {
            row: outcome.row,
            user_id: outcome.user_id.clone(),
            result: result.to_string(),
            status,
            detail,
        }
    }
}

//! Contact submission error.

use reqwest::StatusCode;
use thiserror::Error;

/// The single failure kind for a submission.
///
/// Network failures and rejected statuses both end up here; the fields are
/// diagnostics only.
#[derive(Debug, Error)]
#[error("failed to submit form{}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
pub struct SubmissionError {
    /// Final HTTP status, when a response arrived.
    pub status: Option<StatusCode>,
    /// Transport error, when no usable response arrived.
    #[source]
    pub source: Option<reqwest::Error>,
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            status: e.status(),
            source: Some(e),
        }
    }
}

impl SubmissionError {
    pub fn rejected(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            source: None,
        }
    }
}

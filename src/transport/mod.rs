//! Submission transport module
//!
//! The controller hands a finished [`SubmissionPayload`] to a [`Transport`]
//! and waits for a single success/failure outcome. The HTTP implementation
//! lives in [`http`]; tests inject a mock.

mod http;
mod traits;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use http::HttpTransport;
pub use traits::Transport;

#[cfg(test)]
pub use traits::MockTransport;

/// Validated, trimmed field values packaged for one submission attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

//! Trait abstraction for the submission transport to enable mocking in tests

use async_trait::async_trait;

use super::{SubmissionOutcome, SubmissionPayload};

/// Trait for performing the outbound submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit a validated payload to the remote endpoint.
    ///
    /// Never returns an error: network failures and non-success statuses
    /// are folded into [`SubmissionOutcome::Failure`] with a user-facing
    /// reason.
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome;
}

//! HTTP transport for lead submission
//!
//! POSTs the payload as JSON to a configured endpoint. Success is decided
//! by the HTTP status; failure reasons are pulled from a JSON error body
//! when the endpoint provides one.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{SubmissionOutcome, SubmissionPayload, Transport};

/// Shown when the endpoint cannot be reached at all
const GENERIC_FAILURE: &str = "Erro ao processar solicitação. Tente novamente.";

/// Error body shape returned by lead endpoints
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: Option<String>,
}

/// Transport that submits leads over HTTP
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a new HTTP transport for the given endpoint
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let response = match self.client.post(&self.endpoint).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("lead submission request failed: {e}");
                return SubmissionOutcome::Failure(GENERIC_FAILURE.to_string());
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::info!("lead submitted to {}", self.endpoint);
            return SubmissionOutcome::Success;
        }

        tracing::warn!("lead submission rejected with status {status}");
        let reason = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("Erro HTTP: {}", status.as_u16()));

        SubmissionOutcome::Failure(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalization() {
        let transport =
            HttpTransport::new("https://api.example.com/leads/", Duration::from_secs(30)).unwrap();
        assert_eq!(transport.endpoint(), "https://api.example.com/leads");
    }

    #[test]
    fn test_error_body_reads_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Erro ao processar"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Erro ao processar"));
    }

    #[test]
    fn test_error_body_reads_message_alias() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "Limite atingido"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Limite atingido"));
    }

    #[test]
    fn test_error_body_tolerates_unrelated_json() {
        let body: ErrorBody = serde_json::from_str(r#"{"status": 500}"#).unwrap();
        assert!(body.error.is_none());
    }
}

//! HttpAnswerClient -- concrete [`AnswerTransport`] implementation.
//!
//! Sends questions to the answer service's `/chat` endpoint and probes
//! `/health`. One plain JSON request per call; no streaming, no retries.
//! The per-request timeout comes from client configuration.

use std::time::Duration;

use palaver_core::transport::AnswerTransport;
use palaver_types::api::{AskRequest, AskResponse, HealthReport, TransportError};

/// HTTP client for the answer service.
pub struct HttpAnswerClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnswerClient {
    /// Create a new client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl AnswerTransport for HttpAnswerClient {
    async fn ask(&self, question: &str) -> Result<AskResponse, TransportError> {
        let body = AskRequest {
            question: question.to_string(),
        };
        let url = self.url("/chat");

        tracing::debug!(url = %url, "Sending question to answer service");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<AskResponse>()
            .await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))
    }

    async fn health(&self) -> Result<HealthReport, TransportError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<HealthReport>()
            .await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))
    }
}

//! Wire types for the answer endpoint.
//!
//! These types model the request/response shapes of the remote
//! question-answering API, plus the transport error taxonomy. Response
//! fields are individually optional so a sparse or older server build
//! still decodes; unknown fields are ignored.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Body of `POST {base_url}/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Success body of `POST {base_url}/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Service state reported by `GET {base_url}/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
    /// Any status value this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Degraded => write!(f, "degraded"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
            HealthStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Body of `GET {base_url}/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(default)]
    pub message: String,
}

/// Errors from talking to the answer endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

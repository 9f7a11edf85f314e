//! AnswerTransport trait definition.
//!
//! This is the seam between the conversation controller and the wire.
//! Implementations live in palaver-infra (e.g., `HttpAnswerClient`).

use palaver_types::api::{AskResponse, HealthReport, TransportError};

/// Trait for the remote question-answering endpoint.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// controller issues exactly one `ask` per submission; there is no
/// automatic retry.
pub trait AnswerTransport: Send + Sync {
    /// Submit one question and wait for the service's answer.
    fn ask(
        &self,
        question: &str,
    ) -> impl std::future::Future<Output = Result<AskResponse, TransportError>> + Send;

    /// Probe the service's health endpoint.
    fn health(
        &self,
    ) -> impl std::future::Future<Output = Result<HealthReport, TransportError>> + Send;
}

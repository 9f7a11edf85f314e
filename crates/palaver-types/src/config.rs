//! Client configuration types for Palaver.
//!
//! `ClientConfig` represents the `config.toml` that points the client at
//! an answer endpoint and tunes presentation.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Palaver client.
///
/// Loaded from `~/.palaver/config.toml`. All fields have sensible defaults,
/// so a missing file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the answer service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Display name for the bot side of the conversation.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Per-request timeout enforced by the HTTP transport.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/v1".to_string()
}

fn default_assistant_name() -> String {
    "Assistant".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            assistant_name: default_assistant_name(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

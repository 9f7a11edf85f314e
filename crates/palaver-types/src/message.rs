//! Transcript message types for Palaver.
//!
//! These types model one conversation between the user and the answer
//! service: individual turns, and the snapshot persisted between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single turn in the transcript.
///
/// Messages are immutable once created and ordered by insertion;
/// the transcript is a linear log, not a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    /// Source URLs backing a bot answer (always empty for user messages).
    #[serde(default)]
    pub sources: Vec<String>,
    /// Answer confidence in [0, 1], when the service reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Build a user message from a submitted question.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::User,
            text: text.into(),
            sources: Vec::new(),
            confidence: None,
            created_at: Utc::now(),
        }
    }

    /// Build a bot message from answer text and response metadata.
    pub fn bot(text: impl Into<String>, sources: Vec<String>, confidence: Option<f64>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::Bot,
            text: text.into(),
            sources,
            confidence,
            created_at: Utc::now(),
        }
    }
}

/// The transcript as persisted between runs.
///
/// Written after every completed turn, read once at startup, removed only
/// by an explicit clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    pub messages: Vec<Message>,
    pub saved_at: DateTime<Utc>,
}

//! In-memory transcript log.

use chrono::Utc;
use palaver_types::message::{Message, TranscriptSnapshot};

/// Ordered log of the messages exchanged this session.
///
/// Append-only apart from explicit clearing; insertion order is display
/// order. Owned by the controller for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a transcript from a persisted snapshot.
    pub fn from_snapshot(snapshot: TranscriptSnapshot) -> Self {
        Self {
            messages: snapshot.messages,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            messages: self.messages.clone(),
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_types::message::Sender;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("one"));
        transcript.push(Message::bot("two", Vec::new(), None));
        transcript.push(Message::user("three"));

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("q"));
        transcript.push(Message::bot("a", vec!["https://s.example".to_string()], Some(0.7)));

        let restored = Transcript::from_snapshot(transcript.snapshot());
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.messages()[0].sender, Sender::User);
        assert_eq!(restored.messages()[1].sources.len(), 1);
        assert_eq!(restored.messages(), transcript.messages());
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("q"));
        assert!(!transcript.is_empty());
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}

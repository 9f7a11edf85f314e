//! One-request-at-a-time conversation lifecycle.
//!
//! `ChatController` owns the transcript and the `Idle`/`Sending` gate and
//! drives a full turn: append the user message, run the request with the
//! processing indicator up, append the answer (or the fixed error reply),
//! persist the snapshot, return to `Idle`.

use palaver_types::error::SnapshotError;
use palaver_types::message::{Message, Sender, TranscriptSnapshot};
use tracing::{debug, info, warn};

use crate::conversation::transcript::Transcript;
use crate::markup;
use crate::store::SnapshotStore;
use crate::transport::AnswerTransport;
use crate::view::TranscriptView;

/// Reply used when the service responds without usable answer text.
pub const NO_ANSWER_REPLY: &str =
    "I don't have that information in my knowledge base yet. Try rephrasing your question.";

/// Reply used when the request fails for any reason. Deliberately carries
/// no detail about what went wrong.
pub const ERROR_REPLY: &str =
    "Sorry, something went wrong while answering. Please try again.";

/// Where the controller is in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// What a call to [`ChatController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service answered; a bot reply was appended.
    Answered,
    /// The request failed; the fixed error reply was appended.
    Failed,
    /// The question was empty after trimming; nothing happened.
    IgnoredEmpty,
    /// A request is already in flight; nothing happened.
    Busy,
}

/// Drives one question/answer exchange at a time.
///
/// Generic over transport, store, and view to keep the architecture clean
/// (palaver-core never depends on palaver-infra). Constructed once at
/// startup; the explicit collaborator handles replace any notion of
/// ambient global state.
pub struct ChatController<T: AnswerTransport, S: SnapshotStore, V: TranscriptView> {
    transport: T,
    store: S,
    view: V,
    transcript: Transcript,
    phase: Phase,
}

impl<T: AnswerTransport, S: SnapshotStore, V: TranscriptView> ChatController<T, S, V> {
    pub fn new(transport: T, store: S, view: V) -> Self {
        Self {
            transport,
            store,
            view,
            transcript: Transcript::new(),
            phase: Phase::Idle,
        }
    }

    /// Replay a prior session into the transcript and the view.
    ///
    /// Bot text is re-rendered on the way through, so a restored session
    /// displays exactly like a live one. Called at most once, before the
    /// first submission.
    pub fn restore(&mut self, snapshot: TranscriptSnapshot) {
        let transcript = Transcript::from_snapshot(snapshot);
        for message in transcript.messages() {
            match message.sender {
                Sender::User => self.view.show_user(message),
                Sender::Bot => {
                    let html = markup::render(&message.text);
                    self.view.show_bot(message, &html);
                }
            }
        }
        info!(messages = transcript.len(), "Restored transcript");
        self.transcript = transcript;
    }

    /// Submit one question to the answer service.
    ///
    /// No-op while a request is in flight or when the question trims to
    /// nothing. The user turn is appended before the request is issued and
    /// never rolled back; the bot turn is appended only after the request
    /// settles. The processing indicator is held in a guard for the exact
    /// duration of the network call, so it is cleaned up on every path.
    pub async fn submit(&mut self, question: &str) -> SubmitOutcome {
        if self.phase != Phase::Idle {
            debug!("Submission ignored while a request is in flight");
            return SubmitOutcome::Busy;
        }
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }

        self.phase = Phase::Sending;
        let user = Message::user(question);
        self.view.show_user(&user);
        self.transcript.push(user);

        let indicator = self.view.begin_processing();
        let result = self.transport.ask(question).await;
        drop(indicator);

        let (reply, outcome) = match result {
            Ok(response) => {
                let text = match response.answer {
                    Some(answer) if !answer.trim().is_empty() => answer,
                    _ => NO_ANSWER_REPLY.to_string(),
                };
                (
                    Message::bot(text, response.sources, response.confidence),
                    SubmitOutcome::Answered,
                )
            }
            Err(err) => {
                warn!(error = %err, "Answer request failed");
                (
                    Message::bot(ERROR_REPLY, Vec::new(), None),
                    SubmitOutcome::Failed,
                )
            }
        };

        let html = markup::render(&reply.text);
        self.view.show_bot(&reply, &html);
        self.transcript.push(reply);
        self.persist().await;
        self.phase = Phase::Idle;
        outcome
    }

    /// Drop all transcript state, in memory and on disk.
    pub async fn clear(&mut self) -> Result<(), SnapshotError> {
        self.transcript.clear();
        self.store.clear().await?;
        info!("Transcript cleared");
        Ok(())
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    async fn persist(&self) {
        // A failed write costs the snapshot, not the turn.
        if let Err(err) = self.store.save(&self.transcript.snapshot()).await {
            warn!(error = %err, "Failed to persist transcript snapshot");
        }
    }
}

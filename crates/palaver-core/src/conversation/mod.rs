//! Conversation lifecycle for Palaver.
//!
//! This module owns the transcript log and the submission controller that
//! drives one question/answer exchange at a time against the trait seams
//! defined at the crate root.

pub mod controller;
pub mod transcript;

pub use controller::{ChatController, ERROR_REPLY, NO_ANSWER_REPLY, Phase, SubmitOutcome};
pub use transcript::Transcript;

//! TranscriptView trait definition.
//!
//! The controller's window onto whatever surface displays the
//! conversation. The CLI implements this with styled terminal output;
//! tests implement it with a recorder.

use palaver_types::message::Message;

/// Trait for the conversation display surface.
///
/// `begin_processing` hands back an indicator guard; dropping the guard
/// stops the processing indicator. The controller holds the guard only
/// while a request is in flight, so the indicator is cleaned up on every
/// path out of a submission.
pub trait TranscriptView {
    /// Guard value for the transient processing indicator.
    type Indicator;

    /// Display a user turn.
    fn show_user(&mut self, message: &Message);

    /// Display a bot turn. `html` is the message text already rendered
    /// by the markup renderer.
    fn show_bot(&mut self, message: &Message, html: &str);

    /// Show the processing indicator and start its status-label cycle.
    fn begin_processing(&mut self) -> Self::Indicator;
}

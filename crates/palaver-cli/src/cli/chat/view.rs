//! Terminal implementation of the transcript view.
//!
//! Prints user and bot turns with console styling and runs the thinking
//! indicator as an indicatif spinner with a rotating status label. The
//! spinner is a guard value: dropping it stops the label cycle and clears
//! the line, whatever path the request took.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;

use palaver_core::view::TranscriptView;
use palaver_types::message::Message;

use super::renderer::AnswerRenderer;

/// Status labels cycled on the thinking spinner while a request runs.
const THINKING_LABELS: [&str; 4] = [
    "thinking...",
    "searching the knowledge base...",
    "reading sources...",
    "composing an answer...",
];

/// Interval between status label changes.
const LABEL_CYCLE: Duration = Duration::from_millis(1500);

/// Styled terminal view over the conversation.
pub struct TermView {
    assistant_name: String,
    renderer: AnswerRenderer,
    echo_user: bool,
    muted: bool,
}

impl TermView {
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            renderer: AnswerRenderer::new(),
            echo_user: true,
            muted: false,
        }
    }

    /// Start muted. Used by one-shot commands that replay the saved
    /// conversation without repainting it.
    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }

    /// Toggle user turns. The readline prompt already leaves submitted
    /// lines on screen, so the live chat loop prints only bot turns.
    pub fn set_user_echo(&mut self, echo: bool) {
        self.echo_user = echo;
    }

    /// Toggle all output.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl TranscriptView for TermView {
    type Indicator = ThinkingIndicator;

    fn show_user(&mut self, message: &Message) {
        if self.muted || !self.echo_user {
            return;
        }
        println!();
        println!("  {} {}", style("You >").green().bold(), message.text);
    }

    fn show_bot(&mut self, message: &Message, html: &str) {
        if self.muted {
            return;
        }
        println!();
        println!("  {}", style(&self.assistant_name).cyan().bold());
        let rendered = self.renderer.render(html);
        for line in rendered.lines() {
            println!("  {line}");
        }
        if !message.sources.is_empty() {
            println!(
                "  {}",
                style(format!("Sources: {}", message.sources.join(", "))).dim()
            );
        }
        if let Some(confidence) = message.confidence {
            println!(
                "  {}",
                style(format!("Confidence: {:.0}%", confidence * 100.0)).dim()
            );
        }
    }

    fn begin_processing(&mut self) -> ThinkingIndicator {
        if self.muted {
            ThinkingIndicator::hidden()
        } else {
            ThinkingIndicator::start()
        }
    }
}

/// Spinner guard returned by [`TermView::begin_processing`].
///
/// Owns the label-cycling task. Dropping the guard cancels the task and
/// clears the spinner line.
pub struct ThinkingIndicator {
    bar: ProgressBar,
    cancel: CancellationToken,
}

impl ThinkingIndicator {
    fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(THINKING_LABELS[0]);
        bar.enable_steady_tick(Duration::from_millis(80));

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let ticker = bar.clone();
        tokio::spawn(async move {
            let mut label = 0;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(LABEL_CYCLE) => {
                        label = (label + 1) % THINKING_LABELS.len();
                        ticker.set_message(THINKING_LABELS[label]);
                    }
                }
            }
        });

        Self { bar, cancel }
    }

    /// Inert indicator for muted views.
    fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            cancel: CancellationToken::new(),
        }
    }
}

impl Drop for ThinkingIndicator {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.bar.finish_and_clear();
    }
}

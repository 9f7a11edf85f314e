//! One-shot question command.
//!
//! Sends a single question through the same controller the interactive
//! loop uses, so the exchange lands in the saved conversation and a later
//! `plv chat` picks it up.

use console::style;
use tracing::warn;

use palaver_core::conversation::SubmitOutcome;
use palaver_core::store::SnapshotStore;
use palaver_types::message::Sender;

use crate::cli::chat::view::TermView;
use crate::state::AppState;

/// Ask one question, print the answer, and persist the exchange.
pub async fn ask(state: &AppState, question: &str, json: bool) -> anyhow::Result<()> {
    let snapshot = match state.store().load().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, "Could not load the saved conversation; starting fresh");
            None
        }
    };

    // Restore silently; only the new exchange should print.
    let mut controller = state.controller(TermView::new(state.config.assistant_name.clone()).muted());
    if let Some(snapshot) = snapshot {
        controller.restore(snapshot);
    }
    if !json {
        controller.view_mut().set_muted(false);
    }

    let outcome = controller.submit(question).await;

    if json {
        let reply = match outcome {
            SubmitOutcome::Answered | SubmitOutcome::Failed => controller
                .transcript()
                .messages()
                .iter()
                .rev()
                .find(|m| m.sender == Sender::Bot),
            _ => None,
        };
        let out = serde_json::json!({
            "question": question.trim(),
            "answered": outcome == SubmitOutcome::Answered,
            "answer": reply.map(|m| m.text.clone()),
            "sources": reply.map(|m| m.sources.clone()).unwrap_or_default(),
            "confidence": reply.and_then(|m| m.confidence),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match outcome {
        SubmitOutcome::Answered | SubmitOutcome::Failed => println!(),
        SubmitOutcome::IgnoredEmpty => {
            println!("  {}", style("Nothing to ask.").dim());
        }
        SubmitOutcome::Busy => {}
    }

    Ok(())
}

//! Interactive chat loop.
//!
//! Restores the saved conversation, then alternates between reading input
//! and driving the controller: slash commands run locally, everything else
//! goes to the answer service. The transcript is persisted after every
//! answer, so quitting at any point loses nothing.

use chrono::Local;
use console::style;
use tracing::warn;

use palaver_core::conversation::SubmitOutcome;
use palaver_core::export::transcript_html;
use palaver_core::store::SnapshotStore;
use palaver_types::message::Sender;

use crate::state::{AppState, ConcreteController};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::view::TermView;

/// Run the interactive chat session.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let snapshot = match state.store().load().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, "Could not load the saved conversation; starting fresh");
            None
        }
    };
    let restored = snapshot.as_ref().map(|s| s.messages.len()).unwrap_or(0);

    print_welcome_banner(
        &state.config.assistant_name,
        &state.config.base_url,
        restored,
    );

    let mut controller = state.controller(TermView::new(state.config.assistant_name.clone()));
    if let Some(snapshot) = snapshot {
        controller.restore(snapshot);
    }
    // From here on the readline echo shows user turns.
    controller.view_mut().set_user_echo(false);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) = ChatInput::new(prompt)
        .map_err(|err| anyhow::anyhow!("failed to initialize input: {err}"))?;

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::History => {
                            print_history(&controller, &state.config.assistant_name);
                        }
                        ChatCommand::Export(path) => {
                            export_transcript(&controller, state, path).await;
                        }
                        ChatCommand::Clear => clear_transcript(&mut controller).await,
                        ChatCommand::Cls => input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                match controller.submit(&text).await {
                    SubmitOutcome::Answered | SubmitOutcome::Failed => println!(),
                    SubmitOutcome::IgnoredEmpty | SubmitOutcome::Busy => {}
                }
            }
        }
    }

    Ok(())
}

/// Print one-line previews of every turn in the transcript.
fn print_history(controller: &ConcreteController, assistant_name: &str) {
    let messages = controller.transcript().messages();
    if messages.is_empty() {
        println!("\n  {}\n", style("Nothing here yet. Ask something!").dim());
        return;
    }
    println!();
    for message in messages {
        let label = match message.sender {
            Sender::User => style("You").green().bold(),
            Sender::Bot => style(assistant_name).cyan().bold(),
        };
        let text = message.text.replace('\n', " ");
        let preview: String = if text.chars().count() > 100 {
            let head: String = text.chars().take(97).collect();
            format!("{head}...")
        } else {
            text
        };
        println!("  {label} {preview}");
    }
    println!();
}

/// Write the current transcript to an HTML file.
async fn export_transcript(
    controller: &ConcreteController,
    state: &AppState,
    path: Option<String>,
) {
    let transcript = controller.transcript();
    if transcript.is_empty() {
        println!("\n  {}\n", style("Nothing to export yet.").dim());
        return;
    }
    let path = path.unwrap_or_else(|| {
        format!("palaver-{}.html", Local::now().format("%Y%m%d-%H%M%S"))
    });
    let html = transcript_html(&transcript.snapshot(), &state.config.assistant_name);
    match tokio::fs::write(&path, html).await {
        Ok(()) => println!(
            "\n  {} Exported {} messages to {}\n",
            style("✓").green().bold(),
            transcript.len(),
            style(&path).cyan()
        ),
        Err(err) => println!("\n  {} Export failed: {err}\n", style("!").red().bold()),
    }
}

/// Wipe the transcript, in memory and on disk.
async fn clear_transcript(controller: &mut ConcreteController) {
    match controller.clear().await {
        Ok(()) => println!(
            "\n  {} Conversation cleared.\n",
            style("✓").green().bold()
        ),
        Err(err) => println!(
            "\n  {} Could not clear the saved conversation: {err}\n",
            style("!").red().bold()
        ),
    }
}

//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the saved
//! conversation, help, and exit.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Print the conversation so far.
    History,
    /// Export the conversation to an HTML file.
    Export(Option<String>),
    /// Wipe the conversation, in memory and on disk.
    Clear,
    /// Clear the terminal screen.
    Cls,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts
        .get(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/history" | "/hist" => Some(ChatCommand::History),
        "/export" => Some(ChatCommand::Export(arg)),
        "/clear" => Some(ChatCommand::Clear),
        "/cls" => Some(ChatCommand::Cls),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}     {}",
        style("/help").cyan(),
        "Show this help message"
    );
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Print the conversation so far"
    );
    println!(
        "  {}   {}",
        style("/export").cyan(),
        "Save the conversation as HTML (optional path)"
    );
    println!(
        "  {}    {}",
        style("/clear").cyan(),
        "Delete the saved conversation"
    );
    println!(
        "  {}      {}",
        style("/cls").cyan(),
        "Clear the screen"
    );
    println!(
        "  {}     {}",
        style("/exit").cyan(),
        "Leave the session"
    );
    println!();
    println!(
        "  {}",
        style("Ctrl+D exits; the conversation is saved after every answer").dim()
    );
    println!();
}

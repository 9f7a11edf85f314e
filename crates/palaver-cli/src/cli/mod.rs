//! CLI command definitions and dispatch for the `plv` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are flat verbs
//! (`plv chat`, `plv ask`, `plv status`) since the tool manages a single
//! conversation against a single service.

pub mod ask;
pub mod chat;
pub mod session;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with your document knowledge base from the terminal.
#[derive(Parser)]
#[command(name = "plv", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Ask a single question and print the answer.
    #[command(alias = "q")]
    Ask {
        /// The question to ask.
        question: String,
    },

    /// Show answer service health and saved conversation info.
    Status,

    /// Delete the saved conversation.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Export the saved conversation as a standalone HTML page.
    Export {
        /// Output file path (default: palaver-<timestamp>.html).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

//! Interactive terminal chat for Palaver.
//!
//! This module implements the full chat loop: restored history, a thinking
//! spinner with rotating status labels, slash commands, and an autosaved
//! transcript. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod view;

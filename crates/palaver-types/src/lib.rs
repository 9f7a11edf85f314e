//! Shared domain types for Palaver.
//!
//! This crate contains the core domain types used across the Palaver client:
//! transcript messages, wire shapes for the answer endpoint, client
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod api;
pub mod config;
pub mod error;
pub mod message;

//! Infrastructure implementations for Palaver.
//!
//! Concrete adapters for the trait seams in `palaver-core`: the reqwest
//! HTTP transport for the answer service and the file-backed session
//! snapshot store, plus configuration loading and data directory
//! resolution.

pub mod config;
pub mod http;
pub mod session;

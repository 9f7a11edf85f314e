//! HTTP transport for the answer service.

pub mod client;

pub use client::HttpAnswerClient;

//! Conversation logic and answer rendering for Palaver.
//!
//! This crate defines the "ports" (transport, store, and view traits) that
//! the infrastructure and CLI layers implement, plus the two pieces of real
//! machinery: the markup renderer for answer text and the conversation
//! controller that drives one question/answer exchange at a time. It
//! depends only on `palaver-types` -- never on `palaver-infra` or any
//! network/IO crate.

pub mod conversation;
pub mod export;
pub mod markup;
pub mod store;
pub mod transport;
pub mod view;

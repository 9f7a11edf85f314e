//! Session persistence for Palaver.

pub mod file_store;

pub use file_store::SessionFileStore;

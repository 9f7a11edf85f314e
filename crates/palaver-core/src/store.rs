//! SnapshotStore trait definition.
//!
//! Persistence for the session transcript: written after every completed
//! turn, read once at startup, removed only by an explicit clear.
//! Implementations live in palaver-infra (e.g., `SessionFileStore`).

use palaver_types::error::SnapshotError;
use palaver_types::message::TranscriptSnapshot;

/// Trait for transcript snapshot persistence.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SnapshotStore: Send + Sync {
    /// Write the snapshot, replacing any previous one.
    fn save(
        &self,
        snapshot: &TranscriptSnapshot,
    ) -> impl std::future::Future<Output = Result<(), SnapshotError>> + Send;

    /// Read the persisted snapshot, if one exists.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<TranscriptSnapshot>, SnapshotError>> + Send;

    /// Remove the persisted snapshot. Removing a missing snapshot is not
    /// an error.
    fn clear(&self) -> impl std::future::Future<Output = Result<(), SnapshotError>> + Send;
}

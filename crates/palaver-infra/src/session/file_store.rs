//! File-backed transcript snapshot store.
//!
//! One JSON file per data directory: `{data_dir}/session.json`. Written
//! whole after every completed turn, read once at startup, removed by an
//! explicit clear.

use std::path::{Path, PathBuf};

use palaver_core::store::SnapshotStore;
use palaver_types::error::SnapshotError;
use palaver_types::message::TranscriptSnapshot;

/// Snapshot store over a single JSON file.
pub struct SessionFileStore {
    path: PathBuf,
}

impl SessionFileStore {
    /// Create a store rooted at `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for SessionFileStore {
    async fn save(&self, snapshot: &TranscriptSnapshot) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        // Ensure the data directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<TranscriptSnapshot>, SnapshotError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_str(&content)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        Ok(Some(snapshot))
    }

    async fn clear(&self) -> Result<(), SnapshotError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

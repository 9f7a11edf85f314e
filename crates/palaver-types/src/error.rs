use thiserror::Error;

/// Errors from transcript snapshot persistence (used by trait definitions
/// in palaver-core).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::Serialization("unexpected end of input".to_string());
        assert_eq!(
            err.to_string(),
            "serialization error: unexpected end of input"
        );
    }

    #[test]
    fn test_snapshot_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SnapshotError = io.into();
        assert!(matches!(err, SnapshotError::Io(_)));
    }
}

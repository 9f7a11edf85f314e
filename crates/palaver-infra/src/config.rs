//! Client configuration loader for Palaver.
//!
//! Reads `config.toml` from the data directory (`~/.palaver/` in
//! production) and deserializes it into [`ClientConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use palaver_types::config::ClientConfig;

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `PALAVER_DATA_DIR` environment variable
/// 2. Platform home directory (`~/.palaver`)
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PALAVER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".palaver");
    }

    // Last resort: current directory
    PathBuf::from(".palaver")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_client_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://127.0.0.1:8000/api/v1");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn load_client_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
base_url = "https://answers.example.edu/api/v1"
assistant_name = "Campus Guide"
request_timeout_secs = 10
"#,
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.base_url, "https://answers.example.edu/api/v1");
        assert_eq!(config.assistant_name, "Campus Guide");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[tokio::test]
    async fn load_client_config_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            "assistant_name = \"Helper\"\n",
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.assistant_name, "Helper");
        assert_eq!(config.base_url, "http://127.0.0.1:8000/api/v1");
    }

    #[tokio::test]
    async fn load_client_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://127.0.0.1:8000/api/v1");
        assert_eq!(config.assistant_name, "Assistant");
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("PALAVER_DATA_DIR", "/tmp/test-palaver");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-palaver"));
        unsafe {
            std::env::remove_var("PALAVER_DATA_DIR");
        }
    }
}

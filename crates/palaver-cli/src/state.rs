//! Application state shared by all CLI commands.
//!
//! `AppState` resolves the data directory and loads configuration once at
//! startup. Commands build their transport, store, and controller from it,
//! pinned to the concrete infra implementations.

use std::path::PathBuf;
use std::time::Duration;

use palaver_core::conversation::ChatController;
use palaver_infra::config::{load_client_config, resolve_data_dir};
use palaver_infra::http::HttpAnswerClient;
use palaver_infra::session::SessionFileStore;
use palaver_types::config::ClientConfig;

use crate::cli::chat::view::TermView;

/// Concrete controller type with the generics pinned to infra implementations.
pub type ConcreteController = ChatController<HttpAnswerClient, SessionFileStore, TermView>;

/// Shared application state: configuration plus the resolved data directory.
pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory,
    /// ensure it exists, load configuration.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;
        let config = load_client_config(&data_dir).await;
        Ok(Self { config, data_dir })
    }

    /// HTTP transport against the configured answer service.
    pub fn transport(&self) -> HttpAnswerClient {
        HttpAnswerClient::new(
            self.config.base_url.clone(),
            Duration::from_secs(self.config.request_timeout_secs),
        )
    }

    /// Snapshot store rooted in the data directory.
    pub fn store(&self) -> SessionFileStore {
        SessionFileStore::new(&self.data_dir)
    }

    /// Controller wired to the concrete transport and store.
    pub fn controller(&self, view: TermView) -> ConcreteController {
        ChatController::new(self.transport(), self.store(), view)
    }
}

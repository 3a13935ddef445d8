//! Taskforce server binary.

use std::sync::Arc;

use taskforce_server::infrastructure::{
    config::Settings, server, telemetry::TelemetryBuilder,
};
use taskforce_server::roster::RosterManager;
use taskforce_server::state::AppState;
use taskforce_server::store::JsonFileStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Settings::new()?;

    let _telemetry =
        TelemetryBuilder::from_settings(&config.telemetry, env!("CARGO_PKG_VERSION")).init()?;

    info!("Taskforce server starting...");

    let store = JsonFileStore::new(&config.store.path);
    if config.store.create_if_missing {
        store.ensure_exists().await?;
    }
    info!(path = %store.path().display(), "Using roster document");

    let state = Arc::new(AppState::new(RosterManager::new(Arc::new(store))));

    if let Err(e) = server::run_server(&config.server, state).await {
        error!("Server failed: {:?}", e);
        return Err(e);
    }

    info!("Taskforce server shutdown complete.");
    Ok(())
}

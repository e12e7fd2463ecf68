mod bootstrap;

use crate::bootstrap::{config, logging, refresh};
use anyhow::Result;
use minestatus_events::{AppEvent, EventBus};
use minestatus_status::{HttpStatusApi, StatusChecker, TokioSleep};
use minestatus_store::{MemoryStore, ServerStore};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config_path =
        std::env::var("MINESTATUS_CONFIG").unwrap_or_else(|_| "minestatus.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    // Explicitly constructed store handle, passed where needed
    let store: Arc<dyn ServerStore> = Arc::new(MemoryStore::new());
    config::seed_store(&config, store.as_ref()).await?;

    let api = Arc::new(HttpStatusApi::with_settings(
        &config.checker.base_url,
        &config.checker.user_agent,
        Duration::from_secs(config.checker.request_timeout_secs),
    )?);
    let checker = StatusChecker::with_policy(
        api,
        Arc::new(TokioSleep),
        config.checker.max_attempts,
        Duration::from_millis(config.checker.retry_delay_ms),
    );

    refresh::refresh_all(store.as_ref(), &checker, &events).await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}

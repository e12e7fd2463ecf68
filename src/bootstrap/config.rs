use anyhow::Result;
use minestatus_config::Config;
use minestatus_events::{AppEvent, EventBus};
use minestatus_models::Server;
use minestatus_store::ServerStore;
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    events.emit(AppEvent::ConfigLoading {
        path: config_path.to_string(),
    });

    let config_exists = std::path::Path::new(config_path).exists();
    let config = Config::from_file(config_path).await?;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: config_path.to_string(),
        });
    }

    events.emit(AppEvent::ConfigLoaded {
        servers_count: config.servers.len(),
    });

    Ok(config)
}

/// Seeds the store with the configured entries, in file order.
pub async fn seed_store(config: &Config, store: &dyn ServerStore) -> Result<()> {
    for entry in &config.servers {
        store
            .insert(Server {
                id: 0,
                name: entry.name.clone(),
                address: entry.address.clone(),
                port: entry.port(),
                edition: entry.edition,
                favorite: entry.favorite,
                last_status: None,
            })
            .await?;
    }
    Ok(())
}

use crate::bootstrap::render;
use anyhow::Result;
use minestatus_events::{AppEvent, EventBus};
use minestatus_status::StatusChecker;
use minestatus_store::ServerStore;
use std::sync::Arc;
use std::time::Instant;

/// Checks every stored server one at a time, in stored order, merging each
/// result back into the store as it lands. Strictly sequential: no fan-out,
/// retries and all happen inside the single in-flight check.
pub async fn refresh_all(
    store: &dyn ServerStore,
    checker: &StatusChecker,
    events: &Arc<EventBus>,
) -> Result<()> {
    let servers = store.list().await?;
    events.emit(AppEvent::RefreshStarted {
        count: servers.len(),
    });

    let started = Instant::now();
    let mut online = 0;

    for server in &servers {
        events.emit(AppEvent::CheckStarted {
            name: server.name.clone(),
            lookup: format!("{}:{}", server.address, server.port),
        });

        let check_started = Instant::now();
        let status = checker
            .check(&server.address, server.port, server.edition)
            .await;

        if status.online {
            online += 1;
            events.emit(AppEvent::CheckOnline {
                name: server.name.clone(),
                version: status.version.clone(),
                players: status.current_players.zip(status.max_players),
                duration: check_started.elapsed(),
            });
            render::print_motd(&status);
        } else {
            events.emit(AppEvent::CheckOffline {
                name: server.name.clone(),
                error: status
                    .error
                    .clone()
                    .unwrap_or_else(|| "Server is offline".to_string()),
            });
        }

        tracing::debug!("Persisting status for server {}", server.id);
        store.update_status(server.id, status).await?;
    }

    events.emit(AppEvent::RefreshCompleted {
        online,
        total: servers.len(),
        duration: started.elapsed(),
    });

    Ok(())
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { servers_count: usize },
    ConfigCreated { path: String },

    // Refresh cycle
    RefreshStarted { count: usize },
    CheckStarted { name: String, lookup: String },
    CheckOnline {
        name: String,
        version: Option<String>,
        players: Option<(u32, u32)>,
        duration: Duration,
    },
    CheckOffline { name: String, error: String },
    RefreshCompleted {
        online: usize,
        total: usize,
        duration: Duration,
    },

    // Errors
    Error { context: String, error: String },
}

/// Human-facing progress reporting, distinct from tracing diagnostics.
pub struct EventBus {
    pub(super) silent_mode: bool,
}

use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        if self.silent_mode && !matches!(event, AppEvent::Error { .. }) {
            return;
        }

        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "MineStatus - Server Status Checker".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Shutdown => {
                println!();
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { servers_count } => {
                if servers_count == 0 {
                    println!("  {} No servers configured", "⚠".yellow());
                } else {
                    println!("  {} {} server(s)", "✓".green(), servers_count.to_string().cyan());
                }
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }

            // Refresh cycle
            AppEvent::RefreshStarted { count } => {
                println!("  {} Checking {} server(s)...\n", "→".dimmed(), count);
            }
            AppEvent::CheckStarted { name, lookup } => {
                println!("  {} {} {}", "…".dimmed(), name.white(), lookup.dimmed());
            }
            AppEvent::CheckOnline { name, version, players, duration } => {
                let players = players
                    .map(|(online, max)| format!("{online}/{max}"))
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "  {} {} {} {} {}",
                    "●".green(),
                    name.white(),
                    version.unwrap_or_default().cyan(),
                    players.yellow(),
                    format!("({duration:.0?})").dimmed()
                );
            }
            AppEvent::CheckOffline { name, error } => {
                println!("  {} {} {}", "●".red(), name.white(), error.red());
            }
            AppEvent::RefreshCompleted { online, total, duration } => {
                println!(
                    "\n  {} {}/{} online {}",
                    "✓".green(),
                    online.to_string().green(),
                    total,
                    format!("in {duration:.0?}").dimmed()
                );
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}

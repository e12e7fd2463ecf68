use minestatus_models::ServerEdition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub checker: CheckerSettings,
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
}

/// Knobs of the status checker. One request-timeout budget covers connect
/// and read; the retry delay is linear (`retry_delay_ms * attempt`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckerSettings {
    #[serde(default = "super::defaults::base_url")]
    pub base_url: String,
    #[serde(default = "super::defaults::user_agent")]
    pub user_agent: String,
    #[serde(default = "super::defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "super::defaults::max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "super::defaults::retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            base_url: super::defaults::base_url(),
            user_agent: super::defaults::user_agent(),
            request_timeout_secs: super::defaults::request_timeout_secs(),
            max_attempts: super::defaults::max_attempts(),
            retry_delay_ms: super::defaults::retry_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerEntry {
    pub name: String,
    pub address: String,
    /// Absent means the edition's default port.
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default = "super::defaults::edition")]
    pub edition: ServerEdition,
    #[serde(default)]
    pub favorite: bool,
}

impl ServerEntry {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.edition.default_port())
    }
}

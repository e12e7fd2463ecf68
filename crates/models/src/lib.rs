use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol family of a Minecraft server. Determines the status endpoint
/// variant and the default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerEdition {
    Java,
    Bedrock,
}

impl ServerEdition {
    pub fn default_port(&self) -> u16 {
        match self {
            ServerEdition::Java => 25565,
            ServerEdition::Bedrock => 19132,
        }
    }
}

impl fmt::Display for ServerEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerEdition::Java => write!(f, "java"),
            ServerEdition::Bedrock => write!(f, "bedrock"),
        }
    }
}

/// A saved server entry. `last_status` holds the most recent check result,
/// merged in by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub port: u16,
    pub edition: ServerEdition,
    #[serde(default)]
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<ServerStatus>,
}

/// Outcome of a single status check. Constructed fresh per check and never
/// mutated afterwards; a failed check still produces a record, with `online`
/// false and `error` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    pub online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Best single-line MOTD summary (clean form preferred over raw).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd_raw: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd_clean: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd_html: Option<Vec<String>>,
    /// Base64-encoded server icon, opaque to the checker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    /// Round-trip time. The upstream API does not report it, so this is
    /// always `None`; kept for forward compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Epoch milliseconds at record construction.
    pub last_checked: i64,
}

impl ServerStatus {
    /// Failure-path record: offline with a human-readable cause.
    pub fn offline(error: String) -> Self {
        Self {
            online: false,
            version: None,
            motd: None,
            motd_raw: None,
            motd_clean: None,
            motd_html: None,
            icon: None,
            current_players: None,
            max_players: None,
            ping: None,
            error: Some(error),
            last_checked: Utc::now().timestamp_millis(),
        }
    }
}

use serde::Deserialize;

/// Response shape of the mcsrvstat.us v3 API.
///
/// Only `online` is guaranteed; every other field may be absent, and fields
/// this crate does not know about are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McSrvStatResponse {
    pub online: bool,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub gamemode: Option<String>,
    #[serde(default)]
    pub serverid: Option<String>,
    #[serde(default)]
    pub eula_blocked: Option<bool>,
    /// Base64-encoded PNG favicon.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    #[serde(default)]
    pub motd: Option<Motd>,
    #[serde(default)]
    pub players: Option<Players>,
    #[serde(default)]
    pub map: Option<MapInfo>,
    #[serde(default)]
    pub plugins: Option<Vec<NamedVersion>>,
    #[serde(default)]
    pub mods: Option<Vec<NamedVersion>>,
    #[serde(default)]
    pub info: Option<Motd>,
    #[serde(default)]
    pub debug: Option<DebugInfo>,
}

/// Parallel representations of a possibly multi-line MOTD.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Motd {
    #[serde(default)]
    pub raw: Option<Vec<String>>,
    #[serde(default)]
    pub clean: Option<Vec<String>>,
    #[serde(default)]
    pub html: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Players {
    #[serde(default)]
    pub online: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub list: Option<Vec<Player>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Protocol {
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapInfo {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub clean: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedVersion {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Upstream cache/lookup diagnostics. Carried for completeness, not acted on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebugInfo {
    #[serde(default)]
    pub ping: Option<bool>,
    #[serde(default)]
    pub query: Option<bool>,
    #[serde(default)]
    pub bedrock: Option<bool>,
    #[serde(default)]
    pub srv: Option<bool>,
    #[serde(default)]
    pub querymismatch: Option<bool>,
    #[serde(default)]
    pub ipinsrv: Option<bool>,
    #[serde(default)]
    pub cnameinsrv: Option<bool>,
    #[serde(default)]
    pub animatedmotd: Option<bool>,
    #[serde(default)]
    pub cachehit: Option<bool>,
    #[serde(default)]
    pub cachetime: Option<i64>,
    #[serde(default)]
    pub cacheexpire: Option<i64>,
    #[serde(default)]
    pub apiversion: Option<i32>,
}

//! Default values for configuration fields

use minestatus_models::ServerEdition;

pub fn base_url() -> String {
    "https://api.mcsrvstat.us".to_string()
}

pub fn user_agent() -> String {
    "MineStatus/1.0".to_string()
}

pub fn request_timeout_secs() -> u64 {
    10
}

pub fn max_attempts() -> u32 {
    3
}

pub fn retry_delay_ms() -> u64 {
    1000
}

pub fn edition() -> ServerEdition {
    ServerEdition::Java
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# MineStatus configuration

[checker]
# base_url = "https://api.mcsrvstat.us"
# user_agent = "MineStatus/1.0"
# request_timeout_secs = 10
# max_attempts = 3
# retry_delay_ms = 1000

# [[servers]]
# name = "Hypixel"
# address = "mc.hypixel.net"
# edition = "java"        # or "bedrock"
# port = 25565            # optional, defaults per edition
# favorite = false
"#;

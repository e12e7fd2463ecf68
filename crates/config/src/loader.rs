use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::models::Config;
use std::path::Path;

impl Config {
    /// Loads configuration from a file, writing a commented default template
    /// first if the file does not exist yet.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Config file {} not found, creating default", path.display());
            tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}

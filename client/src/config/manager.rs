// File: client/src/config/manager.rs
use super::ClientConfig;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<ClientConfig>,
}

impl ConfigManager {
    /// Load configuration from `config_path` when given, otherwise from the
    /// environment alone.
    pub async fn new(config_path: Option<String>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Self::load_configuration(&path).await?,
            None => {
                debug!("No config file given, reading agent settings from environment");
                ClientConfig::from_env()?
            }
        };

        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<ClientConfig> {
        self.current_config.clone()
    }

    async fn load_configuration(config_path: &str) -> Result<ClientConfig> {
        let content = fs::read_to_string(config_path)
            .await
            .map_err(|e| anyhow!("Failed to read config {}: {}", config_path, e))?;

        let mut config: ClientConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config {}: {}", config_path, e))?;

        config.apply_env_overrides()?;

        info!(
            "Loaded agent config from {} (address: {}, request timeout: {:?})",
            config_path,
            if config.agent_address.is_empty() { "<unset>" } else { config.agent_address.as_str() },
            config.request_timeout_seconds
        );

        Ok(config)
    }
}

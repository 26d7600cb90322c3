// File: client/src/config/mod.rs
pub mod manager;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::env;

pub use manager::ConfigManager;

/// Connection settings for the agent API.
///
/// The agent address is not validated here; a malformed value only surfaces
/// when a request is built from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub agent_address: String,
    // No deadline unless configured
    pub request_timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn new(agent_address: impl Into<String>) -> Self {
        Self {
            agent_address: agent_address.into(),
            ..Self::default()
        }
    }

    /// Build a configuration purely from `AGENT_ADDRESS` and the optional
    /// timeout variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = Some(seconds);
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }

    /// Fill fields left empty by a config file from the environment.
    /// Values already present win.
    pub(crate) fn apply_env_overrides(&mut self) -> Result<()> {
        if self.agent_address.is_empty() {
            self.agent_address = std::env::var(env::AGENT_ADDRESS).unwrap_or_default();
        }
        if self.request_timeout_seconds.is_none() {
            self.request_timeout_seconds = read_seconds(env::REQUEST_TIMEOUT_SECONDS)?;
        }
        if self.connect_timeout_seconds.is_none() {
            self.connect_timeout_seconds = read_seconds(env::CONNECT_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}

fn read_seconds(var: &str) -> Result<Option<u64>> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| anyhow!("Invalid value for {}: '{}' ({})", var, value, e)),
        Err(_) => Ok(None),
    }
}

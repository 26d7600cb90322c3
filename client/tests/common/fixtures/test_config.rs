//! Test configuration builder for writing agent config files

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for a TOML config file in a temp directory
#[derive(Default)]
pub struct TestConfigBuilder {
    agent_address: Option<String>,
    request_timeout_seconds: Option<u64>,
    connect_timeout_seconds: Option<u64>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent_address(mut self, address: &str) -> Self {
        self.agent_address = Some(address.to_string());
        self
    }

    pub fn request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = Some(seconds);
        self
    }

    pub fn connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_seconds = Some(seconds);
        self
    }

    fn to_toml(&self) -> String {
        let mut toml = String::new();
        if let Some(address) = &self.agent_address {
            toml.push_str(&format!("agent_address = \"{}\"\n", address));
        }
        if let Some(seconds) = self.request_timeout_seconds {
            toml.push_str(&format!("request_timeout_seconds = {}\n", seconds));
        }
        if let Some(seconds) = self.connect_timeout_seconds {
            toml.push_str(&format!("connect_timeout_seconds = {}\n", seconds));
        }
        toml
    }

    /// Write `agent.toml` and return a handle keeping the directory alive
    pub fn build(self) -> TestConfig {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("agent.toml");
        fs::write(&config_path, self.to_toml()).expect("Failed to write agent.toml");

        TestConfig {
            _temp_dir: temp_dir,
            config_path,
        }
    }
}

pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestConfig {
    pub fn path_string(&self) -> String {
        self.config_path.to_string_lossy().to_string()
    }
}

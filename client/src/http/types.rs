// File: client/src/http/types.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::defaults;

/// Host/port pair identifying the machine an agent call is about
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub host: String,
    pub port: String,
}

impl Agent {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }
}

// === REQUEST STRUCTURES ===

#[derive(Debug, Serialize)]
pub struct KeyExchangeRequest<'a> {
    pub host: &'a str,
    pub port: &'a str,
    pub secret: &'a str,
}

/// One source → destination mapping inside a copy request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub rename: bool,
}

#[derive(Debug, Serialize)]
pub struct CopyRequest<'a> {
    pub items: &'a [ResourceItem],
}

// === RESPONSE STRUCTURES ===

#[derive(Debug, Default, Deserialize)]
pub struct KeyExchangeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VersionResponse {
    #[serde(default)]
    pub latency: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub error: Option<String>,
}

/// Outcome of a version probe.
///
/// Always produced, even when the agent could not be reached; `error` says
/// what went wrong in that case and `version` reads `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub latency: String,
    pub error: Option<String>,
}

impl VersionInfo {
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            version: defaults::UNKNOWN_VERSION.to_string(),
            latency: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<VersionResponse> for VersionInfo {
    fn from(response: VersionResponse) -> Self {
        let version = if response.version.is_empty() {
            defaults::UNKNOWN_VERSION.to_string()
        } else {
            response.version
        };

        Self {
            version,
            latency: response.latency,
            error: response.error,
        }
    }
}

/// Resource lookup payload, returned as the agent sent it.
///
/// `error` is not interpreted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceResponse {
    #[serde(default)]
    pub resource: String,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyResponse {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Accepted copy request together with the status the agent answered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    pub status: u16,
    pub response: CopyResponse,
}

// Agents send `"error": ""` for "no error"
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

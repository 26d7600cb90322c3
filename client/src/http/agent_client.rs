// File: client/src/http/agent_client.rs
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::types::{
    Agent, CopyRequest, CopyResponse, CopyResult, KeyExchangeRequest, KeyExchangeResponse,
    ResourceItem, ResourceResponse, VersionInfo, VersionResponse,
};
use crate::config::ClientConfig;
use crate::constants::{endpoints, env, status};
use crate::errors::AgentError;

// Same set Go's url.QueryEscape leaves alone
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Key registration seam, so callers can swap the agent for a fake
pub trait AgentBackend {
    fn exchange_keys(
        &self,
        host: &str,
        port: &str,
        secret: &str,
    ) -> impl Future<Output = Result<(), AgentError>> + Send;
}

#[derive(Debug, Clone)]
enum AddressSource {
    Fixed(String),
    // Re-read AGENT_ADDRESS on every call
    Environment,
}

/// Client for the agent HTTP API.
///
/// Every operation is a single request/response round trip with no retries.
/// The client holds no per-call state, so clones can be used concurrently.
#[derive(Debug, Clone)]
pub struct AgentClient {
    agent: Agent,
    address: AddressSource,
    client: Client,
    timeout: Option<Duration>,
}

impl AgentClient {
    pub fn new(config: &ClientConfig, agent: Agent) -> Result<Self, AgentError> {
        Self::build(
            AddressSource::Fixed(config.agent_address.clone()),
            config,
            agent,
        )
    }

    /// Client that resolves the agent address from `AGENT_ADDRESS` on each
    /// call. Timeouts are read once, here.
    pub fn from_env(agent: Agent) -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::build(AddressSource::Environment, &config, agent)?)
    }

    fn build(address: AddressSource, config: &ClientConfig, agent: Agent) -> Result<Self, AgentError> {
        let mut builder = Client::builder();
        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder.build().map_err(|e| AgentError::RequestConstruction {
            url: config.agent_address.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            agent,
            address,
            client,
            timeout: config.request_timeout(),
        })
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Handle that applies `timeout` as the deadline of every call made
    /// through it. Shares the underlying connection pool.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    // === Operations ===

    /// Register the local public key with `host:port` through the agent.
    pub async fn exchange_keys(&self, host: &str, port: &str, secret: &str) -> Result<(), AgentError> {
        let url = self.endpoint_url(endpoints::REGISTER_PUBLIC_KEY)?;
        let body = encode_body(&url, &KeyExchangeRequest { host, port, secret })?;

        info!("Exchanging keys with {}:{}", host, port);

        let response = self.send(self.post_json(&url, body), &url).await?;
        let result: KeyExchangeResponse = read_json(response, &url).await?;

        if !result.error.is_empty() {
            warn!("Key exchange with {}:{} rejected: {}", host, port, result.error);
            return Err(AgentError::Remote {
                status: None,
                message: format!("error connecting to host: {}", result.error),
            });
        }

        if !result.success {
            warn!("Key exchange with {}:{} reported no success", host, port);
            return Err(AgentError::Remote {
                status: None,
                message: "unexpected error while sending agent API request".to_string(),
            });
        }

        info!("Keys exchanged with {}:{}", host, port);
        Ok(())
    }

    /// Best-effort version probe for the bound agent.
    ///
    /// Never fails: request, transport and decode errors end up in
    /// `VersionInfo::error`, as does an `error` reported by the agent.
    /// Callers must inspect `error` themselves.
    pub async fn get_version(&self) -> VersionInfo {
        match self.fetch_version().await {
            Ok(response) => {
                let info = VersionInfo::from(response);
                if let Some(error) = &info.error {
                    warn!("Agent {}:{} reported version error: {}", self.agent.host, self.agent.port, error);
                }
                info
            }
            Err(e) => {
                warn!("Version probe for {}:{} failed: {}", self.agent.host, self.agent.port, e);
                VersionInfo::unavailable(e.to_string())
            }
        }
    }

    async fn fetch_version(&self) -> Result<VersionResponse, AgentError> {
        let path = format!("{}/{}/{}", endpoints::VERSION, self.agent.host, self.agent.port);
        let url = self.endpoint_url(&path)?;

        let response = self.send(self.client.get(url.clone()), &url).await?;
        read_json(response, &url).await
    }

    /// Fetch the resource at `url` on `host:port`.
    ///
    /// The payload is returned as decoded; an `error` inside it is left for
    /// the caller.
    pub async fn get_resource(&self, host: &str, port: &str, url: &str) -> Result<ResourceResponse, AgentError> {
        let escaped = query_escape(url);
        let path = format!(
            "{}/{}/{}/{}",
            endpoints::RESOURCES,
            host,
            port,
            checked_segment(&escaped)?
        );
        let request_url = self.endpoint_url(&path)?;

        debug!("Fetching resource {} from {}:{}", url, host, port);

        let response = self.send(self.client.get(request_url.clone()), &request_url).await?;
        read_json(response, &request_url).await
    }

    /// Start copying `items` to `host:port`, packed as `archive_name`.
    ///
    /// A non-200 answer is an error carrying the agent's status code and
    /// message. Failures before a response arrives report status 500.
    pub async fn remote_copy(
        &self,
        host: &str,
        port: &str,
        archive_name: &str,
        items: &[ResourceItem],
    ) -> Result<CopyResult, AgentError> {
        let archive_name = trim_archive_name(archive_name);
        let path = format!(
            "{}/{}/{}/{}",
            endpoints::COPY,
            host,
            port,
            checked_segment(archive_name)?
        );
        let url = self.endpoint_url(&path)?;
        let body = encode_body(&url, &CopyRequest { items })?;

        info!("Starting copy of {} item(s) to {}:{} as {}", items.len(), host, port, archive_name);

        let response = self.send(self.post_json(&url, body), &url).await?;
        let status_code = response.status();
        let body = read_body(response, &url).await?;

        if status_code != StatusCode::OK {
            let message = serde_json::from_slice::<CopyResponse>(&body)
                .ok()
                .map(|r| r.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status_code.canonical_reason().unwrap_or_default().to_string());

            warn!("Copy to {}:{} failed with status {}: {}", host, port, status_code, message);
            return Err(AgentError::Remote {
                status: Some(status_code.as_u16()),
                message: format!("unexpected error: {}", message),
            });
        }

        let response: CopyResponse = serde_json::from_slice(&body).map_err(|e| AgentError::decode(url.as_str(), e))?;

        info!("Copy to {}:{} accepted (code {})", host, port, response.code);
        Ok(CopyResult {
            status: status::OK,
            response,
        })
    }

    /// Cancel a running transfer. Returns the agent's status on success.
    pub async fn cancel_transfer(&self, transfer_id: &str) -> Result<u16, AgentError> {
        let path = format!("{}/{}", endpoints::TRANSFERS, transfer_id);
        let url = self.endpoint_url(&path)?;

        info!("Cancelling transfer {}", transfer_id);

        let response = self.send(self.client.delete(url.clone()), &url).await?;
        let status_code = response.status();

        if status_code != StatusCode::OK {
            warn!("Cancelling transfer {} failed with status {}", transfer_id, status_code);
            return Err(AgentError::Remote {
                status: Some(status_code.as_u16()),
                message: format!("unexpected error: {}", status_code),
            });
        }

        Ok(status::OK)
    }

    // === Request plumbing ===

    fn base_address(&self) -> String {
        match &self.address {
            AddressSource::Fixed(address) => address.clone(),
            AddressSource::Environment => std::env::var(env::AGENT_ADDRESS).unwrap_or_default(),
        }
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, AgentError> {
        let raw = format!("{}{}", self.base_address().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| AgentError::RequestConstruction {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }

    fn post_json(&self, url: &Url, body: Vec<u8>) -> RequestBuilder {
        self.client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, AgentError> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        debug!("Sending agent API request: {}", url);

        request
            .send()
            .await
            .map_err(|e| AgentError::from_reqwest(url.as_str(), e))
    }
}

impl AgentBackend for AgentClient {
    fn exchange_keys(
        &self,
        host: &str,
        port: &str,
        secret: &str,
    ) -> impl Future<Output = Result<(), AgentError>> + Send {
        AgentClient::exchange_keys(self, host, port, secret)
    }
}

fn encode_body<T: Serialize>(url: &Url, body: &T) -> Result<Vec<u8>, AgentError> {
    serde_json::to_vec(body).map_err(|e| AgentError::RequestConstruction {
        url: url.to_string(),
        reason: format!("error encoding request body: {}", e),
    })
}

async fn read_body(response: Response, url: &Url) -> Result<Vec<u8>, AgentError> {
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| AgentError::from_reqwest(url.as_str(), e))
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, AgentError> {
    let body = read_body(response, url).await?;
    serde_json::from_slice(&body).map_err(|e| AgentError::decode(url.as_str(), e))
}

/// Escape `raw` for use as a single path segment; spaces become `+`.
pub fn query_escape(raw: &str) -> String {
    raw.split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

// URL parsing collapses dot segments, which would address a different endpoint
fn checked_segment(segment: &str) -> Result<&str, AgentError> {
    if matches!(segment, "." | "..") {
        return Err(AgentError::RequestConstruction {
            url: segment.to_string(),
            reason: "path segment must not be '.' or '..'".to_string(),
        });
    }
    Ok(segment)
}

fn trim_archive_name(archive_name: &str) -> &str {
    archive_name.trim_matches('\n')
}

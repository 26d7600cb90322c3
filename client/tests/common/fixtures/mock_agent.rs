//! Mock HTTP agent server for testing
//!
//! Serves canned responses on the agent API endpoints so the client can be
//! exercised without a real agent running.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock agent server that simulates agent HTTP responses
pub struct MockAgentServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockAgentServer {
    /// Create a new mock agent server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mock key registration answering with `body`, expecting exactly one call
    pub async fn mock_register_key(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/api/register-public-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock version endpoint for `host:port`
    pub async fn mock_version(&self, host: &str, port: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/version/{}/{}", host, port)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock version endpoint that answers only after `delay`
    pub async fn mock_slow_version(&self, host: &str, port: &str, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(format!("/api/version/{}/{}", host, port)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"version": "1.0.0", "latency": "1ms"}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock resource endpoint; `escaped_url` must be the already-escaped segment
    pub async fn mock_resource(&self, host: &str, port: &str, escaped_url: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/resources/{}/{}/{}", host, port, escaped_url)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock copy endpoint answering `status` with `body`
    pub async fn mock_copy(&self, host: &str, port: &str, archive: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/api/copy/{}/{}/{}", host, port, archive)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock transfer cancellation answering `status` with an empty body
    pub async fn mock_cancel(&self, transfer_id: &str, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/transfers/{}", transfer_id)))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock any request on `endpoint` answering with a raw, non-JSON body
    pub async fn mock_raw(&self, http_method: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock any request on `endpoint` answering 200 only after `delay`
    pub async fn mock_slow(&self, http_method: &str, endpoint: &str, delay: Duration) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

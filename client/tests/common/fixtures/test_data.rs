//! Common test data and constants

use agent_client::{Agent, AgentClient, ClientConfig};
use uuid::Uuid;

/// Generate a random transfer ID for testing
pub fn random_transfer_id() -> String {
    Uuid::new_v4().to_string()
}

/// Address nothing is listening on
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Client bound to the default test host, talking to `base_url`
pub fn client_for(base_url: &str) -> AgentClient {
    AgentClient::new(&ClientConfig::new(base_url), Agent::new(hosts::HOST_1, hosts::PORT_1)).unwrap()
}

/// Common test hosts
pub mod hosts {
    pub const HOST_1: &str = "10.0.0.1";
    pub const PORT_1: &str = "9000";
    pub const HOST_2: &str = "10.0.0.2";
    pub const PORT_2: &str = "9001";
}

pub const SECRET: &str = "topsecret";

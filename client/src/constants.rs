//! Central repository for endpoint paths, environment variable names and
//! status codes used when talking to the agent.
//!
//! Constants are grouped by category so the request builders in
//! `http::agent_client` never carry string literals of their own.

/// Agent API endpoint paths (relative to the configured agent address)
pub mod endpoints {
    /// Registers the local public key with a remote host
    pub const REGISTER_PUBLIC_KEY: &str = "/api/register-public-key";

    /// Prefix for `/api/version/{host}/{port}`
    pub const VERSION: &str = "/api/version";

    /// Prefix for `/api/resources/{host}/{port}/{url}`
    pub const RESOURCES: &str = "/api/resources";

    /// Prefix for `/api/copy/{host}/{port}/{archive}`
    pub const COPY: &str = "/api/copy";

    /// Prefix for `/api/transfers/{transfer_id}`
    pub const TRANSFERS: &str = "/api/transfers";
}

/// Environment variables read by `ClientConfig::from_env`
pub mod env {
    /// Base address of the agent service, e.g. `http://127.0.0.1:8080`
    pub const AGENT_ADDRESS: &str = "AGENT_ADDRESS";

    /// Optional per-request deadline in seconds
    pub const REQUEST_TIMEOUT_SECONDS: &str = "AGENT_REQUEST_TIMEOUT_SECONDS";

    /// Optional connect deadline in seconds
    pub const CONNECT_TIMEOUT_SECONDS: &str = "AGENT_CONNECT_TIMEOUT_SECONDS";
}

/// HTTP status codes reported alongside copy and cancel results
pub mod status {
    /// Status reported for failures that happen before any response arrives
    pub const INTERNAL_ERROR: u16 = 500;

    pub const OK: u16 = 200;
}

/// Values substituted when the agent omits a field
pub mod defaults {
    /// Reported by `get_version` when the agent returns no version
    pub const UNKNOWN_VERSION: &str = "unknown";
}


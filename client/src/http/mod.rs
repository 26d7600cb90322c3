// File: client/src/http/mod.rs
//! HTTP communication with the transfer agent
//!
//! The agent runs as a separate service and performs the actual transfers
//! between hosts. This module only builds requests and decodes responses.
//!
//! # Architecture
//!
//! ```text
//! Caller → AgentClient → HTTP Request → Agent → remote host
//!             ↓                           ↓
//!        ClientConfig              JSON response
//!             ↓                           ↓
//!    typed result / AgentError ←──────────┘
//! ```
//!
//! # Endpoints
//!
//! | Method | Path                                  | Operation           |
//! |--------|---------------------------------------|---------------------|
//! | POST   | /api/register-public-key              | `exchange_keys`     |
//! | GET    | /api/version/{host}/{port}            | `get_version`       |
//! | GET    | /api/resources/{host}/{port}/{url}    | `get_resource`      |
//! | POST   | /api/copy/{host}/{port}/{archive}     | `remote_copy`       |
//! | DELETE | /api/transfers/{transfer_id}          | `cancel_transfer`   |
//!
//! # Failure model
//!
//! - One request per call, no retries
//! - No deadline unless configured or set with `AgentClient::with_timeout`
//! - Dropping a call's future aborts the request

pub mod agent_client;
pub mod resources;
pub mod types;

pub use agent_client::{query_escape, AgentBackend, AgentClient};
pub use resources::{ResourceEntry, ResourceListing};
pub use types::{
    Agent, CopyResponse, CopyResult, ResourceItem, ResourceResponse, VersionInfo,
};

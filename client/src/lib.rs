pub mod config;
pub mod constants;
pub mod errors;
pub mod http;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigManager};
pub use errors::{AgentError, ErrorKind};
pub use http::{
    Agent, AgentBackend, AgentClient, CopyResponse, CopyResult, ResourceEntry, ResourceItem,
    ResourceListing, ResourceResponse, VersionInfo,
};

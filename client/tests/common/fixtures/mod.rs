//! Reusable test utilities:
//! - Mock agent HTTP server
//! - Config file builder
//! - Common test data

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_agent;
pub mod test_config;
pub mod test_data;

pub use mock_agent::MockAgentServer;
pub use test_config::TestConfigBuilder;
pub use test_data::*;

//! Error types for agent API calls
//!
//! Every failure is local to a single call. `AgentError` keeps the four
//! failure classes apart so callers can tell a retry-worthy transport hiccup
//! from a failure the agent itself reported.

use std::fmt;

use crate::constants::status;

/// Coarse classification of an `AgentError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be built (bad base address, unserializable body)
    RequestConstruction,

    /// Connection, DNS or deadline failure before a response arrived
    Transport,

    /// A response arrived but its body was not the expected JSON
    Decode,

    /// The agent answered and reported a failure
    RemoteApplication,
}

/// Error returned by agent API operations
#[derive(Debug)]
pub enum AgentError {
    /// Failed to build the request
    RequestConstruction { url: String, reason: String },

    /// Failed to send the request or read the response
    Transport {
        url: String,
        reason: String,
        timed_out: bool,
    },

    /// Response body could not be decoded
    Decode { url: String, reason: String },

    /// Agent reported a failure, either through the status line or the body
    Remote { status: Option<u16>, message: String },
}

impl AgentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgentError::RequestConstruction { .. } => ErrorKind::RequestConstruction,
            AgentError::Transport { .. } => ErrorKind::Transport,
            AgentError::Decode { .. } => ErrorKind::Decode,
            AgentError::Remote { .. } => ErrorKind::RemoteApplication,
        }
    }

    /// Only transport failures are worth retrying; the agent never saw the
    /// request or never answered it.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AgentError::Transport { timed_out: true, .. })
    }

    /// HTTP status associated with this failure.
    ///
    /// Remote failures carry the status the agent answered with. Everything
    /// that failed before a status line was available reports
    /// `500 Internal Server Error`, as do remote failures embedded in a
    /// successful body.
    pub fn status_code(&self) -> u16 {
        match self {
            AgentError::Remote {
                status: Some(code), ..
            } => *code,
            _ => status::INTERNAL_ERROR,
        }
    }

    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_builder() {
            return AgentError::RequestConstruction {
                url: url.to_string(),
                reason: err.to_string(),
            };
        }

        AgentError::Transport {
            url: url.to_string(),
            timed_out: err.is_timeout(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(url: &str, err: serde_json::Error) -> Self {
        AgentError::Decode {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::RequestConstruction { url, reason } => {
                write!(f, "error initializing agent API request to '{}': {}", url, reason)
            }
            AgentError::Transport { url, reason, .. } => {
                write!(f, "error sending agent API request to '{}': {}", url, reason)
            }
            AgentError::Decode { url, reason } => {
                write!(f, "error decoding agent API response from '{}': {}", url, reason)
            }
            AgentError::Remote { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AgentError {}

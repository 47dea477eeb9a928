use thiserror::Error;

/// Main error type for hyperpoll
#[derive(Error, Debug, Clone)]
pub enum HyperPollError {
    /// The request never produced a response (refused, DNS, reset...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape
    #[error("Payload error: {0}")]
    Payload(String),

    /// The fetch did not complete within the configured timeout
    #[error("Fetch timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid state transition
    #[error("Invalid state transition: {0}")]
    InvalidState(String),

    /// Generic error
    #[error("Error: {0}")]
    Other(String),
}

impl HyperPollError {
    /// Whether the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, HyperPollError::Transport(_) | HyperPollError::Timeout(_))
    }
}

/// Result type for hyperpoll operations
pub type Result<T> = std::result::Result<T, HyperPollError>;

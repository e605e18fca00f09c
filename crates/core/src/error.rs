//! Core Error Types
//!
//! Defines the error type shared by the chaos interceptor and the host
//! frameworks it plugs into. Injected failures are mapped onto the same
//! variants a real tool or provider failure would produce, so recovery code
//! cannot tell the two apart.

use thiserror::Error;

/// Core error type for tool execution, model invocation and configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation did not complete in time
    #[error("Timeout: {0}")]
    Timeout(String),

    /// A connection could not be established or was dropped
    #[error("Connection error: {0}")]
    Connection(String),

    /// The remote side rejected the request due to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// The remote service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A value was rejected as malformed or out of range
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A required key was missing
    #[error("Missing key: {0}")]
    MissingKey(String),

    /// Command execution errors
    #[error("Command error: {0}")]
    Command(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a command error
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether a caller could reasonably retry after this error.
    ///
    /// Network- and provider-shaped failures are transient; malformed input,
    /// configuration and internal errors are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CoreError::Timeout(_)
                | CoreError::Connection(_)
                | CoreError::RateLimit(_)
                | CoreError::ServiceUnavailable(_)
        )
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}

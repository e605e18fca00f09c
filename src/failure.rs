//! Failure Kinds and Profiles
//!
//! The closed set of failures the interceptor can inject, and the named
//! presets that group them.
//!
//! Each `FailureKind` is a factory: `FailureKind::instantiate` produces a
//! fresh `InjectedFailure` carrying that kind's default message. Host error
//! types receive injected failures through `From<InjectedFailure>`, and
//! `CoreError` maps every kind onto the variant a real failure of the same
//! shape would use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chaos_core::CoreError;

/// Message used when a tool call fails and no failure kinds are configured.
pub const GENERIC_TOOL_MESSAGE: &str = "Chaos Monkey triggered!";

/// Message used when a model call fails and no failure kinds are configured.
pub const GENERIC_MODEL_MESSAGE: &str = "Chaos Monkey triggered on model call!";

// ============================================================================
// FailureKind
// ============================================================================

/// A kind of failure that can be injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FailureKind {
    /// The operation did not complete in time
    Timeout,
    /// The connection was refused or dropped
    Connection,
    /// The provider rejected the request for exceeding its rate limit
    RateLimit,
    /// The provider is temporarily unavailable
    ServiceUnavailable,
    /// A value was rejected as malformed
    InvalidValue,
    /// A required key was missing
    MissingKey,
}

impl FailureKind {
    /// All kinds, in declaration order.
    pub const ALL: [FailureKind; 6] = [
        FailureKind::Timeout,
        FailureKind::Connection,
        FailureKind::RateLimit,
        FailureKind::ServiceUnavailable,
        FailureKind::InvalidValue,
        FailureKind::MissingKey,
    ];

    /// Canonical config name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connection => "connection",
            FailureKind::RateLimit => "rate_limit",
            FailureKind::ServiceUnavailable => "service_unavailable",
            FailureKind::InvalidValue => "invalid_value",
            FailureKind::MissingKey => "missing_key",
        }
    }

    /// Message carried by a freshly constructed failure of this kind.
    pub fn default_message(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "operation timed out",
            FailureKind::Connection => "connection refused",
            FailureKind::RateLimit => "too many requests",
            FailureKind::ServiceUnavailable => "service temporarily unavailable",
            FailureKind::InvalidValue => "invalid value",
            FailureKind::MissingKey => "required key not found",
        }
    }

    /// Construct a fresh failure of this kind.
    pub fn instantiate(&self) -> InjectedFailure {
        InjectedFailure {
            kind: Some(*self),
            message: self.default_message().to_string(),
        }
    }

    /// Parse a kind from a config string.
    ///
    /// Matching ignores case, `_`, `-` and spaces, and accepts an `Error`
    /// suffix, so `"rate_limit"`, `"RateLimitError"` and `"rate-limit"` are
    /// all the same kind. `"value"` and `"key"` are accepted for the
    /// critical kinds.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        let stem = normalized.strip_suffix("error").unwrap_or(&normalized);

        match stem {
            "timeout" => Some(FailureKind::Timeout),
            "connection" => Some(FailureKind::Connection),
            "ratelimit" => Some(FailureKind::RateLimit),
            "serviceunavailable" | "unavailable" => Some(FailureKind::ServiceUnavailable),
            "invalidvalue" | "value" => Some(FailureKind::InvalidValue),
            "missingkey" | "key" => Some(FailureKind::MissingKey),
            _ => None,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FailureKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureKind::parse(s)
            .ok_or_else(|| CoreError::config(format!("Unknown failure kind: '{}'", s)))
    }
}

impl TryFrom<String> for FailureKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FailureKind::parse(&value).ok_or_else(|| format!("unknown failure kind '{}'", value))
    }
}

impl From<FailureKind> for String {
    fn from(kind: FailureKind) -> String {
        kind.as_str().to_string()
    }
}

// ============================================================================
// FailureProfile
// ============================================================================

/// Named groups of failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureProfile {
    /// Timeouts and dropped connections
    Network,
    /// Provider-side rejections: rate limits and outages
    Llm,
    /// Malformed data: invalid values and missing keys
    Critical,
}

impl FailureProfile {
    /// The kinds this profile injects.
    pub fn kinds(&self) -> &'static [FailureKind] {
        match self {
            FailureProfile::Network => &[FailureKind::Timeout, FailureKind::Connection],
            FailureProfile::Llm => &[FailureKind::RateLimit, FailureKind::ServiceUnavailable],
            FailureProfile::Critical => &[FailureKind::InvalidValue, FailureKind::MissingKey],
        }
    }
}

// ============================================================================
// InjectedFailure
// ============================================================================

/// A failure produced by the interceptor in place of a real call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InjectedFailure {
    kind: Option<FailureKind>,
    message: String,
}

impl InjectedFailure {
    /// A failure with no specific kind, carrying a literal message.
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }

    /// The kind of this failure, or `None` for a generic failure.
    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_generic(&self) -> bool {
        self.kind.is_none()
    }
}

impl From<FailureKind> for InjectedFailure {
    fn from(kind: FailureKind) -> Self {
        kind.instantiate()
    }
}

impl From<InjectedFailure> for CoreError {
    fn from(failure: InjectedFailure) -> Self {
        let InjectedFailure { kind, message } = failure;
        match kind {
            Some(FailureKind::Timeout) => CoreError::Timeout(message),
            Some(FailureKind::Connection) => CoreError::Connection(message),
            Some(FailureKind::RateLimit) => CoreError::RateLimit(message),
            Some(FailureKind::ServiceUnavailable) => CoreError::ServiceUnavailable(message),
            Some(FailureKind::InvalidValue) => CoreError::InvalidValue(message),
            Some(FailureKind::MissingKey) => CoreError::MissingKey(message),
            None => CoreError::Internal(message),
        }
    }
}

impl From<InjectedFailure> for String {
    fn from(failure: InjectedFailure) -> String {
        failure.message
    }
}

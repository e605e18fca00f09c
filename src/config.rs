//! Chaos Configuration
//!
//! `ChaosConfig` is the immutable record an interceptor is built from. It can
//! be written as a struct literal, assembled with `ChaosConfigBuilder`, or
//! loaded from TOML:
//!
//! ```toml
//! failure_rate = 0.25
//! exception_types = ["timeout", "rate_limit"]
//! include_tools = ["fetch_data"]
//! exclude_tools = ["read_file"]
//! seed = 42
//! safety_key = "ENABLE_CHAOS"
//! ```
//!
//! Every field is optional in TOML; missing fields take the defaults below.
//! Validation happens at build/load time and again when an interceptor is
//! constructed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use chaos_core::{CoreError, CoreResult};

use crate::failure::{FailureKind, FailureProfile};

/// Default probability that an eligible call fails.
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Default environment variable that must equal "true" to enable injection.
pub const DEFAULT_SAFETY_KEY: &str = "ENABLE_CHAOS";

fn default_failure_rate() -> f64 {
    DEFAULT_FAILURE_RATE
}

fn default_safety_key() -> String {
    DEFAULT_SAFETY_KEY.to_string()
}

// ============================================================================
// ChaosConfig
// ============================================================================

/// Configuration for a chaos interceptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosConfig {
    /// Probability (0.0 to 1.0) that an eligible call fails
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
    /// Failure kinds to choose from; empty means a generic failure
    #[serde(default)]
    pub exception_types: Vec<FailureKind>,
    /// Tools subject to injection; `None` means every tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tools: Option<Vec<String>>,
    /// Tools never subject to injection (overrides `include_tools`)
    #[serde(default)]
    pub exclude_tools: Vec<String>,
    /// Seed for the interceptor's private random stream (any `i64`,
    /// negative included)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Environment variable gating all injection
    #[serde(default = "default_safety_key")]
    pub safety_key: String,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            failure_rate: DEFAULT_FAILURE_RATE,
            exception_types: Vec::new(),
            include_tools: None,
            exclude_tools: Vec::new(),
            seed: None,
            safety_key: default_safety_key(),
        }
    }
}

/// Outcome of the allow/deny filter for a tool target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// The tool may be injected
    Eligible,
    /// The tool is on the exclude list
    Excluded,
    /// An include list is configured and the tool is not on it
    NotIncluded,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl ChaosConfig {
    /// Start a builder with default values.
    pub fn builder() -> ChaosConfigBuilder {
        ChaosConfigBuilder::new()
    }

    /// Check the invariants an interceptor relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(CoreError::validation(format!(
                "failure_rate must be between 0.0 and 1.0. Got: {}",
                self.failure_rate
            )));
        }
        if self.safety_key.trim().is_empty() {
            return Err(CoreError::validation("safety_key cannot be empty"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: ChaosConfig = toml::from_str(content)
            .map_err(|e| CoreError::config(format!("Failed to parse chaos config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string(self)
            .map_err(|e| CoreError::config(format!("Failed to serialize chaos config: {}", e)))
    }

    /// Apply the allow/deny filter to a tool name. Exclusion is checked first.
    ///
    /// A missing name matches no list, so it is eligible only when no include
    /// list is configured.
    pub fn tool_eligibility(&self, name: Option<&str>) -> Eligibility {
        let excluded = name
            .map(|n| self.exclude_tools.iter().any(|t| t == n))
            .unwrap_or(false);
        if excluded {
            return Eligibility::Excluded;
        }

        match &self.include_tools {
            Some(include) => {
                let included = name
                    .map(|n| include.iter().any(|t| t == n))
                    .unwrap_or(false);
                if included {
                    Eligibility::Eligible
                } else {
                    Eligibility::NotIncluded
                }
            }
            None => Eligibility::Eligible,
        }
    }
}

// ============================================================================
// ChaosConfigBuilder
// ============================================================================

/// Builder for `ChaosConfig`.
///
/// # Example
/// ```ignore
/// let config = ChaosConfig::builder()
///     .failure_rate(0.3)
///     .profile(FailureProfile::Network)
///     .exclude_tool("read_file")
///     .seed(7)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ChaosConfigBuilder {
    failure_rate: Option<f64>,
    exception_types: Vec<FailureKind>,
    include_tools: Option<Vec<String>>,
    exclude_tools: Vec<String>,
    seed: Option<i64>,
    safety_key: Option<String>,
}

impl ChaosConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure probability (must be between 0.0 and 1.0).
    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = Some(rate);
        self
    }

    /// Add a failure kind. Duplicates are ignored.
    pub fn failure_kind(mut self, kind: FailureKind) -> Self {
        if !self.exception_types.contains(&kind) {
            self.exception_types.push(kind);
        }
        self
    }

    /// Add every kind in a profile.
    pub fn profile(self, profile: FailureProfile) -> Self {
        profile
            .kinds()
            .iter()
            .fold(self, |builder, kind| builder.failure_kind(*kind))
    }

    /// Restrict injection to the named tool (may be called repeatedly).
    pub fn include_tool(mut self, name: impl Into<String>) -> Self {
        self.include_tools
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Exempt the named tool from injection.
    pub fn exclude_tool(mut self, name: impl Into<String>) -> Self {
        self.exclude_tools.push(name.into());
        self
    }

    /// Seed the interceptor's random stream.
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the environment variable that gates injection.
    pub fn safety_key(mut self, key: impl Into<String>) -> Self {
        self.safety_key = Some(key.into());
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> CoreResult<ChaosConfig> {
        let config = ChaosConfig {
            failure_rate: self.failure_rate.unwrap_or(DEFAULT_FAILURE_RATE),
            exception_types: self.exception_types,
            include_tools: self.include_tools,
            exclude_tools: self.exclude_tools,
            seed: self.seed,
            safety_key: self.safety_key.unwrap_or_else(default_safety_key),
        };
        config.validate()?;
        Ok(config)
    }
}

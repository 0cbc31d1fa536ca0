//! Client configuration
//!
//! `ClientConfig` carries what every request needs (API key, endpoint and
//! timeout). `RetryPolicy` controls the backoff loop and is kept separate so
//! it can be handed to a single fetch. `FileConfig` is the optional YAML file
//! the CLI reads before applying flags and environment variables.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default listings endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.stagingeb.com/v1/properties";

/// Default connect/read timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Client Config
// ============================================================================

/// Immutable connection settings for the listings API
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_endpoint: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Validate and build a config
    pub fn new(
        api_key: impl Into<String>,
        base_endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }

        let base_endpoint = base_endpoint.into();
        let url = Url::parse(&base_endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }

        Ok(Self {
            api_key,
            base_endpoint,
            timeout,
        })
    }

    /// Value sent in the `X-Authorization` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// First page URL
    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// Connect and read timeout for each attempt
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_endpoint", &self.base_endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Retry Policy
// ============================================================================

/// Retry and backoff settings for a fetch
///
/// A fetch makes at most `max_retries + 1` attempts. After a retryable
/// response on zero-based attempt `n` it waits `base_delay * 2^n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub max_retries: u32,
    /// Delay after the first retryable response
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a policy
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Total number of attempts a fetch may make
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Exponential backoff delay after the given zero-based attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor)
    }
}

// ============================================================================
// Config File
// ============================================================================

/// Optional settings loaded from a YAML file
///
/// ```yaml
/// api_key: l7u502p8v46ba3ppgvj5y2aad50lb9
/// endpoint: https://api.stagingeb.com/v1/properties
/// timeout_secs: 30
/// max_retries: 3
/// base_delay_ms: 1000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub max_retries: Option<u32>,
    #[serde(default)]
    pub base_delay_ms: Option<u64>,
}

impl FileConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }
}

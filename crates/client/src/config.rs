//! Configuration for the enhancement client
//!
//! Supports environment-based configuration with sensible defaults. The
//! AES key/IV for the settings payload are injected here rather than baked
//! into the cipher, so they can be rotated or overridden for testing.

use crate::error::{EnhanceError, Result};
use std::env;
use std::time::Duration;

/// Default provider API root
const DEFAULT_API_URL: &str = "https://aienhancer.ai/api/v1";

/// Default `Referer` header value the provider expects
const DEFAULT_REFERER: &str = "https://aienhancer.ai";

/// Default AES key for the settings payload (24 bytes, AES-192)
const DEFAULT_AES_KEY: &str = "ai-enhancer-web__aes-key";

/// Default AES IV for the settings payload (16 bytes)
const DEFAULT_AES_IV: &str = "aienhancer-aesiv";

/// Default interval between status checks
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Default cap on status checks per task
const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Provider API root URL
    pub base_url: String,
    /// Value sent in the `Referer` header
    pub referer: String,
    /// Per-request transport timeout
    pub timeout: Duration,
    /// AES key for the settings payload (16, 24, or 32 bytes)
    pub aes_key: String,
    /// AES IV for the settings payload (16 bytes)
    pub aes_iv: String,
    /// Interval between status checks while a task is running
    pub poll_interval: Duration,
    /// Maximum number of status checks before giving up
    pub max_poll_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: Duration::from_secs(30),
            aes_key: DEFAULT_AES_KEY.to_string(),
            aes_iv: DEFAULT_AES_IV.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `PIXELIFT_API_URL`: Provider API root
    /// - `PIXELIFT_REFERER`: `Referer` header value
    /// - `PIXELIFT_TIMEOUT_SECS`: Transport timeout in seconds
    /// - `PIXELIFT_AES_KEY` / `PIXELIFT_AES_IV`: Settings payload key material
    /// - `PIXELIFT_POLL_INTERVAL_MS`: Poll interval in milliseconds
    /// - `PIXELIFT_MAX_POLL_ATTEMPTS`: Status check cap
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url = env::var("PIXELIFT_API_URL").unwrap_or(defaults.base_url);
        let referer = env::var("PIXELIFT_REFERER").unwrap_or(defaults.referer);
        let aes_key = env::var("PIXELIFT_AES_KEY").unwrap_or(defaults.aes_key);
        let aes_iv = env::var("PIXELIFT_AES_IV").unwrap_or(defaults.aes_iv);

        let timeout = env::var("PIXELIFT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let poll_interval = env::var("PIXELIFT_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        let max_poll_attempts = env::var("PIXELIFT_MAX_POLL_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_poll_attempts);

        Ok(Self {
            base_url,
            referer,
            timeout,
            aes_key,
            aes_iv,
            poll_interval,
            max_poll_attempts,
        })
    }

    /// Builder-style method to set the API root URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the `Referer` header value
    #[must_use]
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// Builder-style method to set the transport timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the settings payload key material
    #[must_use]
    pub fn with_aes_key_iv(mut self, key: impl Into<String>, iv: impl Into<String>) -> Self {
        self.aes_key = key.into();
        self.aes_iv = iv.into();
        self
    }

    /// Builder-style method to set the poll interval
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Builder-style method to set the status check cap
    #[must_use]
    pub fn with_max_poll_attempts(mut self, attempts: u32) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(EnhanceError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(EnhanceError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(EnhanceError::config("timeout cannot be zero"));
        }

        if !matches!(self.aes_key.len(), 16 | 24 | 32) {
            return Err(EnhanceError::config(
                "aes_key must be 16, 24, or 32 bytes long",
            ));
        }

        if self.aes_iv.len() != 16 {
            return Err(EnhanceError::config("aes_iv must be 16 bytes long"));
        }

        if self.max_poll_attempts == 0 {
            return Err(EnhanceError::config("max_poll_attempts cannot be zero"));
        }

        Ok(())
    }
}

//! Error types for the enhancement client

use thiserror::Error;

/// Result type alias for enhancement operations
pub type Result<T> = std::result::Result<T, EnhanceError>;

/// Enhancement client errors
#[derive(Error, Debug)]
pub enum EnhanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider rejected the call at the transport level
    #[error("Provider error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Image format is not accepted by the provider
    #[error("Unsupported image format: {mime}")]
    UnsupportedFormat {
        /// Detected MIME type
        mime: String,
    },

    /// Task creation was rejected or returned no task ID
    #[error("Task creation failed: {message}")]
    TaskCreationFailed {
        /// Provider error message
        message: String,
    },

    /// The status check itself was rejected by the provider
    #[error("Status check failed: {message}")]
    StatusCheckFailed {
        /// Provider error message
        message: String,
    },

    /// The task reached a failed terminal state
    #[error("Task failed: {message}")]
    TaskFailed {
        /// Provider error message
        message: String,
    },

    /// The task did not reach a terminal state within the attempt cap
    #[error("Polling timed out after {attempts} attempts")]
    PollTimeout {
        /// Number of status checks performed
        attempts: u32,
    },

    /// Settings payload encryption failed
    #[error("Settings encryption failed: {0}")]
    Crypto(#[from] pixelift_crypto::CryptoError),

    /// Image payload handling failed
    #[error("Image error: {0}")]
    Image(#[from] pixelift_image::ImageError),
}

impl EnhanceError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error was caused by invalid caller input rather than
    /// a provider or transport failure
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::Image(_) | Self::Config(_)
        )
    }

    /// Check if the task itself reached a terminal failure (as opposed to
    /// the protocol around it breaking)
    #[must_use]
    pub fn is_task_failure(&self) -> bool {
        matches!(self, Self::TaskFailed { .. } | Self::PollTimeout { .. })
    }
}

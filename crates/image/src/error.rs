//! Error types for the image crate.

use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur while handling image payloads.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Input is not a `data:image/...;base64,...` URI
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Base64 payload could not be decoded
    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded image payload is empty
    #[error("Image data is empty")]
    EmptyImage,
}

//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during crypto operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key length is not a valid AES key size
    #[error("Invalid AES key length: {0} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength(usize),

    /// IV length does not match the AES block size
    #[error("Invalid AES IV length: {0} bytes (expected 16)")]
    InvalidIvLength(usize),

    /// Ciphertext is not valid base64
    #[error("Invalid base64 ciphertext: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Ciphertext padding is malformed
    #[error("Invalid PKCS7 padding in ciphertext")]
    Padding,
}

//! Cryptographic utilities for Pixelift.
//!
//! This crate provides AES-CBC encryption with PKCS7 padding for the
//! provider's settings payload wire format: ciphertext is carried as a
//! standard-alphabet base64 string. Encryption is deterministic for a fixed
//! key/IV pair; there is no per-call nonce.

#![warn(missing_docs)]

mod cbc_impl;
mod error;

pub use cbc_impl::{decrypt_settings, encrypt_settings};
pub use error::{CryptoError, Result};

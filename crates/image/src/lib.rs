//! Image payload utilities for Pixelift.
//!
//! This crate provides:
//! - Format detection from magic bytes
//! - `data:` URI encoding and parsing for base64 image payloads

#![warn(missing_docs)]

mod data_uri;
mod detect;
mod error;

pub use data_uri::{encode_data_uri, parse_data_uri, DecodedImage};
pub use detect::{detect_format, ImageFormat};
pub use error::{ImageError, Result};

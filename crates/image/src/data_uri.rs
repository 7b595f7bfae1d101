//! Encoding and parsing of `data:` URIs for image payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::detect::ImageFormat;
use crate::error::{ImageError, Result};

/// An image decoded from a `data:` URI.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// MIME type declared in the URI, e.g. `image/png`.
    ///
    /// The declared type is not trusted for format decisions; callers sniff
    /// the magic bytes instead.
    pub declared_mime: String,
}

/// Encode raw image bytes as a `data:<mime>;base64,...` URI.
pub fn encode_data_uri(format: ImageFormat, data: &[u8]) -> String {
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data))
}

/// Parse a `data:image/...;base64,...` URI into raw bytes.
///
/// # Errors
/// - [`ImageError::InvalidDataUri`] if the prefix or the `;base64,` marker
///   is missing
/// - [`ImageError::Base64`] if the payload is not valid base64
/// - [`ImageError::EmptyImage`] if the decoded payload is empty
pub fn parse_data_uri(uri: &str) -> Result<DecodedImage> {
    if !uri.starts_with("data:image/") {
        return Err(ImageError::InvalidDataUri(
            "expected a data:image/*;base64,... URI".into(),
        ));
    }

    let rest = &uri["data:".len()..];
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| ImageError::InvalidDataUri("missing \";base64,\" marker".into()))?;

    let data = STANDARD.decode(payload.trim())?;
    if data.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    Ok(DecodedImage {
        data,
        declared_mime: mime.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_round_trip() {
        let uri = encode_data_uri(ImageFormat::Png, PNG_MAGIC);
        assert!(uri.starts_with("data:image/png;base64,"));

        let decoded = parse_data_uri(&uri).unwrap();
        assert_eq!(decoded.data, PNG_MAGIC);
        assert_eq!(decoded.declared_mime, "image/png");
    }

    #[test]
    fn test_rejects_non_image_uri() {
        let err = parse_data_uri("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, ImageError::InvalidDataUri(_)));

        let err = parse_data_uri("http://example.com/cat.png").unwrap_err();
        assert!(matches!(err, ImageError::InvalidDataUri(_)));
    }

    #[test]
    fn test_rejects_missing_base64_marker() {
        let err = parse_data_uri("data:image/png,rawdata").unwrap_err();
        assert!(matches!(err, ImageError::InvalidDataUri(_)));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = parse_data_uri("data:image/png;base64,!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, ImageError::Base64(_)));
    }

    #[test]
    fn test_rejects_empty_payload() {
        let err = parse_data_uri("data:image/png;base64,").unwrap_err();
        assert!(matches!(err, ImageError::EmptyImage));
    }
}

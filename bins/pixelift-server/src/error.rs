//! HTTP failure mapping for the enhancement endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixelift_client::presets::style_names;
use pixelift_client::{EnhanceError, UnknownAction};
use pixelift_image::ImageError;
use serde::Serialize;

/// Machine-readable error codes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoImage,
    InvalidImageFormat,
    InvalidBase64,
    EmptyImage,
    UnknownAction,
    InvalidStyle,
    InvalidScale,
    MissingPrompt,
    UnsupportedFormat,
    TaskCreationFailed,
    StatusCheckFailed,
    TaskFailed,
    PollTimeout,
    UpstreamError,
    MethodNotAllowed,
    ProcessingError,
}

/// A failed request, rendered as the service's JSON error body
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    code: ErrorCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: bool,
    message: &'a str,
    code: ErrorCode,
}

impl ApiFailure {
    fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// HTTP status this failure maps to
    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable code for this failure
    #[cfg(test)]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn no_image() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::NoImage,
            "No image provided. Please include base64 image data.",
        )
    }

    pub fn unknown_action(err: UnknownAction) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::UnknownAction, err.to_string())
    }

    pub fn invalid_style(style: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::InvalidStyle,
            format!(
                "Invalid style: {style}. Valid styles: {}",
                style_names().join(", ")
            ),
        )
    }

    pub fn invalid_scale() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::InvalidScale,
            "Scale must be a number between 1 and 10",
        )
    }

    pub fn missing_prompt() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::MissingPrompt,
            "Prompt is required for this action",
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::MethodNotAllowed,
            "Method not allowed. Use POST or GET.",
        )
    }
}

impl From<ImageError> for ApiFailure {
    fn from(err: ImageError) -> Self {
        let (code, message) = match &err {
            ImageError::InvalidDataUri(_) => (
                ErrorCode::InvalidImageFormat,
                "Invalid image format. Must be data:image/*;base64,...".to_string(),
            ),
            ImageError::Base64(_) => {
                (ErrorCode::InvalidBase64, "Invalid base64 image data".to_string())
            }
            ImageError::EmptyImage => (ErrorCode::EmptyImage, "Image data is empty".to_string()),
        };
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }
}

impl From<EnhanceError> for ApiFailure {
    fn from(err: EnhanceError) -> Self {
        match err {
            EnhanceError::UnsupportedFormat { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ErrorCode::UnsupportedFormat,
                err.to_string(),
            ),
            EnhanceError::TaskCreationFailed { .. } => Self::new(
                StatusCode::BAD_GATEWAY,
                ErrorCode::TaskCreationFailed,
                err.to_string(),
            ),
            EnhanceError::StatusCheckFailed { .. } => Self::new(
                StatusCode::BAD_GATEWAY,
                ErrorCode::StatusCheckFailed,
                err.to_string(),
            ),
            EnhanceError::TaskFailed { .. } => {
                Self::new(StatusCode::BAD_GATEWAY, ErrorCode::TaskFailed, err.to_string())
            }
            EnhanceError::PollTimeout { .. } => Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                ErrorCode::PollTimeout,
                err.to_string(),
            ),
            EnhanceError::Request(_) | EnhanceError::ApiResponse { .. } => Self::new(
                StatusCode::BAD_GATEWAY,
                ErrorCode::UpstreamError,
                err.to_string(),
            ),
            EnhanceError::Image(image_err) => image_err.into(),
            _ => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::ProcessingError,
                err.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        tracing::warn!(code = ?self.code, message = %self.message, "Request failed");
        (
            self.status,
            Json(ErrorBody {
                error: true,
                message: &self.message,
                code: self.code,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failures_are_4xx() {
        assert_eq!(ApiFailure::no_image().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiFailure::invalid_scale().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiFailure::missing_prompt().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiFailure::missing_prompt().code(), ErrorCode::MissingPrompt);
    }

    #[test]
    fn test_provider_failures_are_5xx() {
        let failure: ApiFailure = EnhanceError::TaskFailed {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(failure.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(failure.code(), ErrorCode::TaskFailed);

        let failure: ApiFailure = EnhanceError::PollTimeout { attempts: 120 }.into();
        assert_eq!(failure.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(failure.code(), ErrorCode::PollTimeout);
    }

    #[test]
    fn test_unsupported_format_is_a_caller_error() {
        let failure: ApiFailure = EnhanceError::UnsupportedFormat {
            mime: "image/tiff".to_string(),
        }
        .into();
        assert_eq!(failure.status(), StatusCode::BAD_REQUEST);
        assert_eq!(failure.code(), ErrorCode::UnsupportedFormat);
    }

    #[test]
    fn test_invalid_style_lists_valid_names() {
        let failure = ApiFailure::invalid_style("vaporwave");
        assert!(failure.message.contains("vaporwave"));
        assert!(failure.message.contains("anime"));
    }
}

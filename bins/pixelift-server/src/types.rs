//! Request and response bodies for the enhancement endpoint.

use crate::error::ApiFailure;
use chrono::Utc;
use pixelift_client::{Action, TaskResult};
use pixelift_image::parse_data_uri;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default style preset name
pub const DEFAULT_STYLE: &str = "anime";

/// Inbound enhancement request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnhanceRequest {
    /// Base64 `data:` URI of the image to process
    #[serde(default)]
    pub image: Option<String>,
    /// Action selector; defaults to style transfer
    #[serde(default)]
    pub action: Option<String>,
    /// Style preset name for style transfer
    #[serde(default)]
    pub style: Option<String>,
    /// Prompt for prompt-guided actions
    #[serde(default)]
    pub prompt: Option<String>,
    /// Upscale factor, 1..=10; accepted as a number or numeric string
    #[serde(default)]
    pub scale: Option<Value>,
    /// Editor model name
    #[serde(default)]
    pub model: Option<String>,
}

impl EnhanceRequest {
    /// Parse the action selector, defaulting to style transfer
    pub fn action(&self) -> Result<Action, ApiFailure> {
        match self.action.as_deref() {
            None => Ok(Action::default()),
            Some(name) => name.parse().map_err(ApiFailure::unknown_action),
        }
    }

    /// Decode and validate the inbound image payload
    pub fn decode_image(&self) -> Result<Vec<u8>, ApiFailure> {
        let uri = self.image.as_deref().ok_or_else(ApiFailure::no_image)?;
        let decoded = parse_data_uri(uri)?;
        Ok(decoded.data)
    }

    /// The style name, falling back to the default preset
    #[must_use]
    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or(DEFAULT_STYLE)
    }

    /// The prompt, required non-blank for prompt-guided actions
    pub fn require_prompt(&self) -> Result<&str, ApiFailure> {
        self.prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
            .ok_or_else(ApiFailure::missing_prompt)
    }
}

/// Parse and bound-check the upscale factor
pub fn parse_scale(value: &Value) -> Result<u32, ApiFailure> {
    let scale = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match scale {
        Some(s) if (1..=10).contains(&s) => Ok(s as u32),
        _ => Err(ApiFailure::invalid_scale()),
    }
}

/// Service metadata returned on GET
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 1],
    pub methods: [&'static str; 3],
    pub features: [&'static str; 5],
    pub note: &'static str,
}

impl ServiceInfo {
    /// Metadata for the running build
    #[must_use]
    pub fn current() -> Self {
        Self {
            status: "online",
            name: "Pixelift API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ["/api/enhance"],
            methods: ["POST", "GET", "OPTIONS"],
            features: Action::NAMES,
            note: "Use POST with a JSON body to process images",
        }
    }
}

/// Successful enhancement response
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    pub success: bool,
    pub id: String,
    pub output: Value,
    pub input: Value,
    pub status: String,
    pub timestamp: String,
    pub action: &'static str,
    pub style: String,
}

impl EnhanceResponse {
    /// Build the response body from a completed task
    #[must_use]
    pub fn new(action: Action, style: &str, result: TaskResult) -> Self {
        Self {
            success: true,
            id: result.id,
            output: result.output,
            input: result.input,
            status: result.status,
            timestamp: Utc::now().to_rfc3339(),
            action: action.as_str(),
            style: style.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let request: EnhanceRequest = serde_json::from_str("{}").unwrap();
        assert!(request.image.is_none());
        assert_eq!(request.action().unwrap(), Action::ToAnime);
        assert_eq!(request.style(), "anime");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let request: EnhanceRequest =
            serde_json::from_value(json!({"action": "sharpen"})).unwrap();
        assert!(request.action().is_err());
    }

    #[test]
    fn test_missing_image_is_rejected() {
        let request = EnhanceRequest::default();
        assert!(request.decode_image().is_err());
    }

    #[test]
    fn test_prompt_must_be_non_blank() {
        let request: EnhanceRequest =
            serde_json::from_value(json!({"prompt": "   "})).unwrap();
        assert!(request.require_prompt().is_err());

        let request: EnhanceRequest =
            serde_json::from_value(json!({"prompt": "add a hat"})).unwrap();
        assert_eq!(request.require_prompt().unwrap(), "add a hat");
    }

    #[test]
    fn test_parse_scale_accepts_number_and_string() {
        assert_eq!(parse_scale(&json!(4)).unwrap(), 4);
        assert_eq!(parse_scale(&json!("8")).unwrap(), 8);
        assert_eq!(parse_scale(&json!(1)).unwrap(), 1);
        assert_eq!(parse_scale(&json!(10)).unwrap(), 10);
    }

    #[test]
    fn test_parse_scale_bounds() {
        assert!(parse_scale(&json!(0)).is_err());
        assert!(parse_scale(&json!(11)).is_err());
        assert!(parse_scale(&json!(-3)).is_err());
        assert!(parse_scale(&json!("huge")).is_err());
        assert!(parse_scale(&json!(null)).is_err());
    }

    #[test]
    fn test_service_info_shape() {
        let info = ServiceInfo::current();
        assert_eq!(info.status, "online");
        assert_eq!(info.endpoints, ["/api/enhance"]);
        assert!(info.features.contains(&"rmbg"));
    }
}

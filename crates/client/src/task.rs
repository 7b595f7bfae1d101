//! Provider task protocol: create a task, then poll it to a terminal state
//!
//! A task observed by the poller moves through
//! `CREATED -> RUNNING* -> {SUCCEEDED | FAILED | TIMED_OUT}`. The provider
//! offers no cancellation path; dropping the poll future is the only way to
//! stop early, and the futures here are safe to drop at any await point.

use crate::client::EnhancerClient;
use crate::error::{EnhanceError, Result};
use pixelift_image::{detect_format, encode_data_uri, ImageFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Provider-level sentinel code for a successful API call
pub const SUCCESS_CODE: i64 = 100_000;

/// Image formats the provider accepts
const ALLOWED_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
    ImageFormat::Bmp,
];

/// Statuses the provider is known to report for an in-flight task
const RUNNING_STATUSES: [&str; 4] = ["pending", "processing", "starting", "queued"];

/// Which provider endpoint family a task targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointVariant {
    /// The `r` endpoints: style transfer, background removal, upscaling
    Standard,
    /// The `k` endpoints: prompt-guided image editing
    Editor,
}

impl EndpointVariant {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Standard => "r",
            Self::Editor => "k",
        }
    }

    /// Task-creation URL under the given API root
    pub(crate) fn create_url(self, base_url: &str) -> String {
        format!(
            "{}/{}/image-enhance/create",
            base_url.trim_end_matches('/'),
            self.path_segment()
        )
    }

    /// Status-check URL under the given API root
    pub(crate) fn result_url(self, base_url: &str) -> String {
        format!(
            "{}/{}/image-enhance/result",
            base_url.trim_end_matches('/'),
            self.path_segment()
        )
    }
}

/// Settings payload for task creation
///
/// `Raw` strings are submitted to the provider untouched, so callers holding
/// a pre-serialized (or pre-encrypted) payload can pass it through.
/// Structured configs are serialized to JSON and encrypted with the
/// configured AES key/IV before submission.
#[derive(Debug, Clone)]
pub enum SettingsPayload {
    /// Pre-serialized settings string, sent as-is
    Raw(String),
    /// Structured settings, encrypted before submission
    Config(Value),
}

impl From<Value> for SettingsPayload {
    fn from(value: Value) -> Self {
        Self::Config(value)
    }
}

/// Generic provider response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Provider status code; [`SUCCESS_CODE`] on success
    pub code: i64,
    /// Human-readable provider message
    #[serde(default)]
    pub message: Option<String>,
    /// Payload, present on success
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
struct CreateTaskRequest<'a> {
    model: u32,
    image: &'a str,
    settings: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CreateTaskData {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Serialize)]
struct TaskStatusRequest<'a> {
    task_id: &'a str,
}

/// Transient per-attempt status payload; not retained between polls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskStatusData {
    /// Provider-reported task status string
    #[serde(default)]
    pub status: Option<String>,
    /// Error message, present when the task failed
    #[serde(default)]
    pub error: Option<String>,
    /// Output artifact reference, present on success
    #[serde(default)]
    pub output: Option<Value>,
    /// Echo of the input artifact, present on success
    #[serde(default)]
    pub input: Option<Value>,
}

/// Final result of a successfully completed task
#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    /// Provider-issued task ID
    pub id: String,
    /// Output artifact reference
    pub output: Value,
    /// Echo of the input artifact
    pub input: Value,
    /// Terminal status string as reported by the provider
    pub status: String,
}

/// How a single status response should be treated by the poll loop
#[derive(Debug, PartialEq, Eq)]
enum Disposition {
    Succeeded,
    Failed,
    Running,
}

fn classify(data: &TaskStatusData) -> Disposition {
    let status = data.status.as_deref().unwrap_or_default();

    // Success needs both artifacts; a terminal status without them means
    // the provider is still materializing the result.
    if matches!(status, "succeeded" | "success") && data.output.is_some() && data.input.is_some() {
        return Disposition::Succeeded;
    }

    if matches!(status, "failed" | "fail") || data.error.is_some() {
        return Disposition::Failed;
    }

    Disposition::Running
}

impl EnhancerClient {
    /// Submit a new enhancement task
    ///
    /// Detects the image format from magic bytes, rejects formats the
    /// provider does not accept, and submits the base64 data URI together
    /// with the model selector and the (optionally encrypted) settings
    /// payload. Returns the provider-issued opaque task ID.
    #[instrument(skip(self, image, settings))]
    pub async fn create_task(
        &self,
        variant: EndpointVariant,
        model: u32,
        image: &[u8],
        settings: SettingsPayload,
    ) -> Result<String> {
        let format = detect_format(image);
        if !ALLOWED_FORMATS.contains(&format) {
            return Err(EnhanceError::UnsupportedFormat {
                mime: format.mime_type().to_string(),
            });
        }
        let image_uri = encode_data_uri(format, image);

        let config = self.config();
        let settings = match settings {
            SettingsPayload::Raw(raw) => raw,
            SettingsPayload::Config(value) => {
                let plaintext = serde_json::to_string(&value)?;
                pixelift_crypto::encrypt_settings(
                    config.aes_key.as_bytes(),
                    config.aes_iv.as_bytes(),
                    plaintext.as_bytes(),
                )?
            }
        };

        let url = variant.create_url(&config.base_url);
        let envelope: Envelope<CreateTaskData> = self
            .post(
                &url,
                &CreateTaskRequest {
                    model,
                    image: &image_uri,
                    settings: &settings,
                },
            )
            .await?;

        if envelope.code != SUCCESS_CODE {
            return Err(EnhanceError::TaskCreationFailed {
                message: envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let id = envelope.data.and_then(|data| data.id).ok_or_else(|| {
            EnhanceError::TaskCreationFailed {
                message: "Provider response carried no task ID".to_string(),
            }
        })?;

        debug!(task_id = %id, "Task created");
        Ok(id)
    }

    /// Poll a task until it reaches a terminal state
    ///
    /// Issues a status check every `poll_interval`, up to
    /// `max_poll_attempts` times. A provider-level rejection of the status
    /// check itself fails immediately; only a still-running status is
    /// retried. Exhausting the attempt cap fails with
    /// [`EnhanceError::PollTimeout`].
    #[instrument(skip(self))]
    pub async fn poll_task(&self, variant: EndpointVariant, task_id: &str) -> Result<TaskResult> {
        let config = self.config();
        let url = variant.result_url(&config.base_url);

        for attempt in 1..=config.max_poll_attempts {
            let envelope: Envelope<TaskStatusData> =
                self.post(&url, &TaskStatusRequest { task_id }).await?;

            if envelope.code != SUCCESS_CODE {
                return Err(EnhanceError::StatusCheckFailed {
                    message: envelope
                        .message
                        .unwrap_or_else(|| "Unknown error".to_string()),
                });
            }

            let data = envelope.data.unwrap_or_default();
            match classify(&data) {
                Disposition::Succeeded => {
                    debug!(attempt, "Task succeeded");
                    return Ok(TaskResult {
                        id: task_id.to_string(),
                        output: data.output.unwrap_or(Value::Null),
                        input: data.input.unwrap_or(Value::Null),
                        status: data.status.unwrap_or_default(),
                    });
                }
                Disposition::Failed => {
                    return Err(EnhanceError::TaskFailed {
                        message: data
                            .error
                            .unwrap_or_else(|| "Unknown error".to_string()),
                    });
                }
                Disposition::Running => {
                    let status = data.status.as_deref().unwrap_or("unknown");
                    if RUNNING_STATUSES.contains(&status) {
                        debug!(attempt, status, "Task still running");
                    } else {
                        warn!(attempt, status, "Unrecognized task status, continuing to poll");
                    }
                    tokio::time::sleep(config.poll_interval).await;
                }
            }
        }

        Err(EnhanceError::PollTimeout {
            attempts: config.max_poll_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_urls() {
        let base = "https://aienhancer.ai/api/v1";
        assert_eq!(
            EndpointVariant::Standard.create_url(base),
            "https://aienhancer.ai/api/v1/r/image-enhance/create"
        );
        assert_eq!(
            EndpointVariant::Standard.result_url(base),
            "https://aienhancer.ai/api/v1/r/image-enhance/result"
        );
        assert_eq!(
            EndpointVariant::Editor.create_url(base),
            "https://aienhancer.ai/api/v1/k/image-enhance/create"
        );

        // Trailing slash must not double up
        assert_eq!(
            EndpointVariant::Editor.result_url("https://aienhancer.ai/api/v1/"),
            "https://aienhancer.ai/api/v1/k/image-enhance/result"
        );
    }

    #[test]
    fn test_envelope_deserialize() {
        let envelope: Envelope<CreateTaskData> = serde_json::from_str(
            r#"{"code": 100000, "message": "ok", "data": {"id": "task-42"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.code, SUCCESS_CODE);
        assert_eq!(envelope.data.unwrap().id.unwrap(), "task-42");

        // Missing data and message are tolerated
        let envelope: Envelope<CreateTaskData> =
            serde_json::from_str(r#"{"code": 50001}"#).unwrap();
        assert_ne!(envelope.code, SUCCESS_CODE);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_classify_success_requires_both_artifacts() {
        let data: TaskStatusData = serde_json::from_value(json!({
            "status": "succeeded",
            "output": "https://cdn.example/out.png",
            "input": "https://cdn.example/in.png"
        }))
        .unwrap();
        assert_eq!(classify(&data), Disposition::Succeeded);

        // "success" is an accepted synonym
        let data: TaskStatusData = serde_json::from_value(json!({
            "status": "success",
            "output": "o",
            "input": "i"
        }))
        .unwrap();
        assert_eq!(classify(&data), Disposition::Succeeded);

        // Terminal status without artifacts keeps polling
        let data: TaskStatusData =
            serde_json::from_value(json!({"status": "succeeded"})).unwrap();
        assert_eq!(classify(&data), Disposition::Running);
    }

    #[test]
    fn test_classify_failure() {
        let data: TaskStatusData =
            serde_json::from_value(json!({"status": "failed", "error": "x"})).unwrap();
        assert_eq!(classify(&data), Disposition::Failed);

        let data: TaskStatusData = serde_json::from_value(json!({"status": "fail"})).unwrap();
        assert_eq!(classify(&data), Disposition::Failed);

        // An error field alone is terminal even with a running status
        let data: TaskStatusData =
            serde_json::from_value(json!({"status": "processing", "error": "boom"})).unwrap();
        assert_eq!(classify(&data), Disposition::Failed);
    }

    #[test]
    fn test_classify_running() {
        for status in ["pending", "processing", "starting", "queued", "warming-up"] {
            let data: TaskStatusData =
                serde_json::from_value(json!({ "status": status })).unwrap();
            assert_eq!(classify(&data), Disposition::Running, "status {status}");
        }

        // Missing status is treated as still running
        let data = TaskStatusData::default();
        assert_eq!(classify(&data), Disposition::Running);
    }
}

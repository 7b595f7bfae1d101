//! Enhancement operations

use crate::client::EnhancerClient;
use crate::error::Result;
use crate::presets::{editor_model_id, style_preset};
use crate::task::{EndpointVariant, SettingsPayload, TaskResult};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Provider pipeline for style transfer and custom-prompt generation
const STYLE_MODEL: u32 = 5;

/// Provider pipeline for background removal
const RMBG_MODEL: u32 = 4;

/// Provider pipeline for upscaling
const UPSCALE_MODEL: u32 = 3;

/// Default upscale factor when the caller supplies none
pub const DEFAULT_SCALE: u32 = 6;

/// Enhancement API interface
#[derive(Clone)]
pub struct EnhanceApi {
    client: EnhancerClient,
}

impl EnhanceApi {
    /// Create a new enhancement API interface
    pub(crate) fn new(client: EnhancerClient) -> Self {
        Self { client }
    }

    /// Style-transfer the image using a named preset
    ///
    /// Unknown style names are passed through as a raw settings string, so
    /// callers holding a pre-encrypted payload can submit it directly.
    pub async fn to_anime(&self, image: &[u8], style: &str) -> Result<TaskResult> {
        let settings = match style_preset(style) {
            Some(preset) => SettingsPayload::Config(preset.to_value()),
            None => SettingsPayload::Raw(style.to_string()),
        };

        debug!(style, "Submitting style-transfer task");
        self.run(EndpointVariant::Standard, STYLE_MODEL, image, settings)
            .await
    }

    /// Remove the image background
    pub async fn remove_background(&self, image: &[u8]) -> Result<TaskResult> {
        let settings = json!({
            "threshold": 0,
            "reverse": false,
            "background_type": "rgba",
            "format": "png",
        });

        debug!("Submitting background-removal task");
        self.run(EndpointVariant::Standard, RMBG_MODEL, image, settings.into())
            .await
    }

    /// Upscale the image by an integer factor
    pub async fn upscale(&self, image: &[u8], scale: u32) -> Result<TaskResult> {
        debug!(scale, "Submitting upscale task");
        self.run(
            EndpointVariant::Standard,
            UPSCALE_MODEL,
            image,
            json!({ "scale": scale }).into(),
        )
        .await
    }

    /// Upscale the image guided by a prompt
    pub async fn upscale_with_prompt(&self, image: &[u8], prompt: &str) -> Result<TaskResult> {
        let settings = json!({
            "image_size": "auto",
            "output_format": "png",
            "prompt": prompt,
        });

        debug!("Submitting prompt-guided upscale task");
        self.run(
            EndpointVariant::Standard,
            UPSCALE_MODEL,
            image,
            settings.into(),
        )
        .await
    }

    /// Edit the image with a prompt against a named editor model
    ///
    /// Caller-supplied overrides are merged over the default editor
    /// settings. Unknown model names use the default editor pipeline.
    pub async fn edit_image(
        &self,
        image: &[u8],
        model: &str,
        prompt: &str,
        overrides: Option<Map<String, Value>>,
    ) -> Result<TaskResult> {
        let model_id = editor_model_id(model);

        let mut settings = json!({
            "size": "4K",
            "aspect_ratio": "match_input_image",
            "go_fast": true,
            "prompt": prompt,
            "output_quality": 100,
            "disable_safety_checker": true,
        });
        if let Some(overrides) = overrides {
            if let Some(map) = settings.as_object_mut() {
                for (key, value) in overrides {
                    map.insert(key, value);
                }
            }
        }

        debug!(model, model_id, "Submitting editor task");
        self.run(EndpointVariant::Editor, model_id, image, settings.into())
            .await
    }

    /// Style transfer with a caller-supplied prompt instead of a preset
    pub async fn custom_anime(&self, image: &[u8], prompt: &str) -> Result<TaskResult> {
        let settings = json!({
            "size": "4K",
            "aspect_ratio": "match_input_image",
            "output_format": "png",
            "sequential_image_generation": "disabled",
            "max_images": 1,
            "prompt": prompt,
        });

        debug!("Submitting custom style-transfer task");
        self.run(EndpointVariant::Standard, STYLE_MODEL, image, settings.into())
            .await
    }

    /// Create the task and poll it to completion
    async fn run(
        &self,
        variant: EndpointVariant,
        model: u32,
        image: &[u8],
        settings: SettingsPayload,
    ) -> Result<TaskResult> {
        let task_id = self
            .client
            .create_task(variant, model, image, settings)
            .await?;
        self.client.poll_task(variant, &task_id).await
    }
}

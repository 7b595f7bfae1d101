//! Provider preset tables for style transfer and editor models

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A named style-transfer configuration record
#[derive(Debug, Clone, Serialize)]
pub struct StylePreset {
    /// Output resolution tier
    pub size: &'static str,
    /// Aspect-ratio policy
    pub aspect_ratio: &'static str,
    /// Output image format
    pub output_format: &'static str,
    /// Sequential generation flag
    pub sequential_image_generation: &'static str,
    /// Maximum number of generated images
    pub max_images: u32,
    /// Style prompt sent to the model
    pub prompt: &'static str,
}

impl StylePreset {
    const fn style_transfer(output_format: &'static str, prompt: &'static str) -> Self {
        Self {
            size: "2K",
            aspect_ratio: "match_input_image",
            output_format,
            sequential_image_generation: "disabled",
            max_images: 1,
            prompt,
        }
    }

    /// Render the preset as a JSON settings value
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

static STYLE_PRESETS: Lazy<HashMap<&'static str, StylePreset>> = Lazy::new(|| {
    HashMap::from([
        (
            "manga",
            StylePreset::style_transfer(
                "jpg",
                "Convert the provided image into a KOREAN-STYLE MANGA illustration. Apply strong stylization with clear and noticeable differences from the original image.",
            ),
        ),
        (
            "anime",
            StylePreset::style_transfer(
                "jpg",
                "Convert the provided image into an ANIME-STYLE illustration. Apply strong stylization with clear and noticeable differences from the original image.",
            ),
        ),
        (
            "ghibli",
            StylePreset::style_transfer(
                "jpg",
                "Convert the provided image into a STUDIO GHIBLI-STYLE illustration. Apply strong stylization with clear and noticeable differences from the original image.",
            ),
        ),
        (
            "cyberpunk",
            StylePreset::style_transfer(
                "jpg",
                "Convert the provided image into a CYBERPUNK-STYLE illustration with neon colors, futuristic elements, and dark atmosphere.",
            ),
        ),
        (
            "watercolor",
            StylePreset::style_transfer(
                "png",
                "Convert the provided image into a WATERCOLOR painting style with soft brush strokes and pastel colors.",
            ),
        ),
        (
            "pixelart",
            StylePreset::style_transfer(
                "png",
                "Convert the provided image into PIXEL ART style with 8-bit retro gaming aesthetic.",
            ),
        ),
        (
            "sketch",
            StylePreset::style_transfer(
                "jpg",
                "Convert the provided image into a detailed PENCIL SKETCH with realistic shading and artistic strokes.",
            ),
        ),
        (
            "oilpainting",
            StylePreset::style_transfer(
                "jpg",
                "Convert the provided image into an OIL PAINTING style with thick brush strokes and rich colors.",
            ),
        ),
    ])
});

/// Look up a style preset by name
#[must_use]
pub fn style_preset(name: &str) -> Option<&'static StylePreset> {
    STYLE_PRESETS.get(name)
}

/// Names of all known style presets, sorted
#[must_use]
pub fn style_names() -> Vec<&'static str> {
    let mut names: Vec<_> = STYLE_PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Default editor model name
pub const DEFAULT_EDITOR_MODEL: &str = "nano_banana";

/// Resolve an editor model name to its provider pipeline ID
///
/// Unknown names fall back to the default model.
#[must_use]
pub fn editor_model_id(name: &str) -> u32 {
    match name {
        "nano_banana" => 2,
        "seed_dream" => 5,
        "flux" => 8,
        "qwen_image" => 9,
        _ => 2,
    }
}

//! Router construction and request handlers.

use crate::error::ApiFailure;
use crate::types::{parse_scale, EnhanceRequest, EnhanceResponse, ServiceInfo};
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use pixelift_client::endpoints::enhance::DEFAULT_SCALE;
use pixelift_client::presets::{style_preset, DEFAULT_EDITOR_MODEL};
use pixelift_client::{Action, EnhancerClient};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Build the service router with permissive CORS
pub fn router(client: EnhancerClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::POST,
            Method::OPTIONS,
            Method::GET,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(86_400));

    Router::new()
        .route(
            "/api/enhance",
            get(service_info)
                .post(process_image)
                .options(preflight)
                .put(method_not_allowed)
                .delete(method_not_allowed)
                .patch(method_not_allowed),
        )
        .layer(cors)
        .with_state(client)
}

/// GET: service metadata
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Plain OPTIONS outside the CORS preflight path
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiFailure {
    ApiFailure::method_not_allowed()
}

/// POST: validate the request, dispatch to the task client, map the outcome
async fn process_image(
    State(client): State<EnhancerClient>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, ApiFailure> {
    let image = request.decode_image()?;
    let action = request.action()?;
    let style = request.style();

    info!(action = %action, image_bytes = image.len(), "Processing enhancement request");

    let api = client.enhance();
    let result = match action {
        Action::ToAnime => {
            if style_preset(style).is_none() {
                return Err(ApiFailure::invalid_style(style));
            }
            api.to_anime(&image, style).await?
        }
        Action::RemoveBackground => api.remove_background(&image).await?,
        Action::Upscale => match (&request.scale, &request.prompt) {
            (Some(value), _) => {
                let scale = parse_scale(value)?;
                api.upscale(&image, scale).await?
            }
            (None, Some(prompt)) => api.upscale_with_prompt(&image, prompt).await?,
            (None, None) => api.upscale(&image, DEFAULT_SCALE).await?,
        },
        Action::EditImage => {
            let prompt = request.require_prompt()?;
            let model = request.model.as_deref().unwrap_or(DEFAULT_EDITOR_MODEL);
            api.edit_image(&image, model, prompt, None).await?
        }
        Action::CustomAnime => {
            let prompt = request.require_prompt()?;
            api.custom_anime(&image, prompt).await?
        }
    };

    Ok(Json(EnhanceResponse::new(action, style, result)))
}

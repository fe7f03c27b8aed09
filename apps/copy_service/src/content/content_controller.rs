use axum::{http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::generation_service::{GenerationRequest, Platform, Tone};
use crate::app_module::AppState;

fn default_variation_count() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default = "default_variation_count")]
    pub variations: u32,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub variations: Vec<String>,
    pub platform: &'static str,
    pub tone: &'static str,
}

pub fn content_router() -> axum::Router {
    Router::new()
        .route("/generate", post(generate_content))
        .with_state(())
}

pub async fn generate_content(
    Extension(ctx): Extension<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> impl IntoResponse {
    let request_id = Uuid::new_v4();
    let platform = Platform::from_key(&request.platform);
    let tone = Tone::from_key(&request.tone);

    let generation_request = GenerationRequest {
        description: request.product_description,
        platform,
        tone,
        variation_count: request.variations,
    };

    tracing::info!(
        %request_id,
        platform = platform.as_key(),
        tone = tone.as_key(),
        "Received generation request"
    );

    match ctx
        .service
        .generation_service
        .generate(&generation_request)
        .await
    {
        Ok(set) => (
            StatusCode::OK,
            Json(GenerateContentResponse {
                variations: set.variations,
                platform: platform.as_key(),
                tone: tone.as_key(),
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%request_id, "Content generation failed: {}", error);
            (
                error.status_code(),
                Json(json!({ "error": error.to_string() })),
            )
                .into_response()
        }
    }
}

use crate::{Completion, CompletionRequest, LanguageModel, LlmError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: ApiErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

pub struct AnthropicModel {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicModel {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl LanguageModel for AnthropicModel {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let url = format!("{}/v1/messages", self.base_url);

        tracing::debug!(model = %request.model, "Submitting completion request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|error| LlmError::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, &body));
        }

        let completion = response
            .json::<Completion>()
            .await
            .map_err(|error| LlmError::Provider(format!("Malformed completion payload: {}", error)))?;

        if let Some(usage) = completion.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Completion received"
            );
        }

        Ok(completion)
    }
}

fn map_error_status(status: StatusCode, body: &str) -> LlmError {
    // Anthropic error payloads carry {"error": {"message": ...}}; fall back
    // to the status line when the body is not parseable.
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimit,
        StatusCode::BAD_REQUEST => LlmError::InvalidRequest(message),
        _ => LlmError::Provider(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}

use axum::http::StatusCode;
use quill_llm::LlmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Anthropic API key is not configured. Please add ANTHROPIC_API_KEY to your .env file.")]
    Configuration,

    #[error("Product description is required")]
    Validation,

    #[error("Invalid Anthropic API key. Please check your .env file.")]
    Authentication,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimit,

    #[error("{0}")]
    Upstream(String),

    #[error("No content was generated. Please try again.")]
    EmptyGeneration,
}

impl GenerationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::Validation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for GenerationError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::Authentication(_) => GenerationError::Authentication,
            LlmError::RateLimit => GenerationError::RateLimit,
            other => GenerationError::Upstream(other.to_string()),
        }
    }
}

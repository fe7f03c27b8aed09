use std::sync::Arc;
use std::time::Duration;

use quill_llm::{ChatMessage, CompletionRequest, LanguageModel};
use tokio::time::timeout;

use crate::content::variation_parser::VariationParser;
use crate::error::GenerationError;
use crate::prompts::marketing_copy_prompt::MarketingCopyPrompt;

pub const GENERATION_MODEL: &str = "claude-sonnet-4-20250514";
const MAX_OUTPUT_TOKENS: u32 = 1500;
const SAMPLING_TEMPERATURE: f32 = 0.8;
const REMOTE_CALL_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Linkedin,
    Email,
    Instagram,
    Facebook,
}

impl Platform {
    /// Unrecognized keys fall back to Twitter rather than failing.
    pub fn from_key(key: &str) -> Self {
        match key {
            "linkedin" => Platform::Linkedin,
            "email" => Platform::Email,
            "instagram" => Platform::Instagram,
            "facebook" => Platform::Facebook,
            _ => Platform::Twitter,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Email => "email",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Enthusiastic,
    Informative,
    Humorous,
}

impl Tone {
    /// Unrecognized keys fall back to Professional rather than failing.
    pub fn from_key(key: &str) -> Self {
        match key {
            "casual" => Tone::Casual,
            "enthusiastic" => Tone::Enthusiastic,
            "informative" => Tone::Informative,
            "humorous" => Tone::Humorous,
            _ => Tone::Professional,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Informative => "informative",
            Tone::Humorous => "humorous",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub description: String,
    pub platform: Platform,
    pub tone: Tone,
    pub variation_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariationSet {
    pub variations: Vec<String>,
}

#[derive(Clone)]
pub struct GenerationService {
    model: Option<Arc<dyn LanguageModel>>,
}

impl GenerationService {
    /// The model is absent when no API key is configured; every request is
    /// then rejected with a configuration error.
    pub fn new(model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { model }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<VariationSet, GenerationError> {
        let model = self.model.as_ref().ok_or(GenerationError::Configuration)?;

        if request.description.trim().is_empty() {
            return Err(GenerationError::Validation);
        }

        let prompt = MarketingCopyPrompt::build(
            &request.description,
            request.platform,
            request.tone,
            request.variation_count,
        );

        let completion_request = CompletionRequest {
            model: GENERATION_MODEL.to_string(),
            system: prompt.system_instruction.to_string(),
            messages: vec![ChatMessage::user(prompt.user_prompt)],
            temperature: SAMPLING_TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        tracing::info!(
            platform = request.platform.as_key(),
            tone = request.tone.as_key(),
            variations = request.variation_count,
            "Requesting content generation"
        );

        let completion = match timeout(REMOTE_CALL_TIMEOUT, model.complete(completion_request)).await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(GenerationError::Upstream(
                    "The generation request timed out. Please try again.".to_string(),
                ))
            }
        };

        let raw = completion.text();
        if raw.trim().is_empty() {
            return Err(GenerationError::EmptyGeneration);
        }

        let mut variations = VariationParser::parse(&raw);
        if variations.is_empty() {
            // The model ignored the separator instruction entirely; serve
            // the whole reply as a single variation instead of discarding it.
            variations.push(raw.trim().to_string());
        }

        tracing::info!(count = variations.len(), "Generation parsed into variations");

        Ok(VariationSet { variations })
    }
}

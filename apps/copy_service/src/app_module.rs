use std::sync::Arc;

use quill_llm::anthropic::AnthropicModel;
use quill_llm::LanguageModel;

use crate::config::ServiceConfig;
use crate::content::generation_service::GenerationService;

#[derive(Clone)]
pub struct AppService {
    pub generation_service: GenerationService,
}

impl AppService {
    pub fn new(config: &ServiceConfig) -> Self {
        let model = config
            .anthropic_api_key
            .clone()
            .map(|key| Arc::new(AnthropicModel::new(key)) as Arc<dyn LanguageModel>);

        Self {
            generation_service: GenerationService::new(model),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            service: AppService::new(&config),
            config,
        }
    }
}

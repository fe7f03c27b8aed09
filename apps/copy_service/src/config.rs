use std::env;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub environment: String,
}

impl ServiceConfig {
    /// Reads configuration from the environment. An empty API key counts
    /// as unset.
    pub fn from_env() -> Self {
        let anthropic_api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8000);
        let environment = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());

        Self {
            anthropic_api_key,
            port,
            environment,
        }
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }
}

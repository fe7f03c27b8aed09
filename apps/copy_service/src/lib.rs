pub mod app_module;
pub mod app_router;
pub mod config;
pub mod content;
pub mod error;
pub mod health;
pub mod prompts;

pub use error::GenerationError;

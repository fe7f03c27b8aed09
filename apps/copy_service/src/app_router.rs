use axum::{routing::get, Router};

use crate::{content::content_controller::content_router, health::health_controller};

pub fn application_router() -> Router {
    Router::new()
        .route("/v1/health", get(health_controller::health))
        .nest("/v1/content", content_router())
}

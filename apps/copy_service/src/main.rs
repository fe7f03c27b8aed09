use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Extension, Router};
use copy_service::{app_module::AppState, app_router::application_router, config::ServiceConfig};
use dotenvy::dotenv;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt::format::FmtSpan, FmtSubscriber};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = ServiceConfig::from_env();

    let subscriber_builder = FmtSubscriber::builder()
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if config.is_dev() {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
        .expect("setting dev subscriber failed");
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
        .expect("setting prod subscriber failed");
    }

    if config.anthropic_api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY is not set, generation requests will be rejected");
    }

    let port = config.port;
    let state = AppState::new(config);

    let app = Router::new().merge(application_router()).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|error: BoxError| async move {
                if error.is::<tower::timeout::error::Elapsed>() {
                    Ok(StatusCode::REQUEST_TIMEOUT)
                } else {
                    Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled internal error: {}", error),
                    ))
                }
            }))
            .timeout(Duration::from_secs(90))
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
            .into_inner(),
    );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("unable to create listener");

    tracing::info!("Server started, listening on port {}", port);
    axum::serve(listener, app)
        .await
        .expect("unable to start server");
}

//! HTTP server for the helpline customer-support assistant.

mod chat;
mod config;
mod error;

use chat::AppState;
use config::{CorsConfig, ServerConfig};
use helpline_agent::SupportAgent;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let state = Arc::new(AppState::new(SupportAgent::new()));

    let app = chat::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

/// Builds the CORS layer from configuration.
///
/// The widget is typically served from another origin, so methods and
/// headers stay open; only the origin is configurable.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allowed_origin == "*" {
        layer.allow_origin(Any)
    } else {
        let origin = cors
            .allowed_origin
            .parse::<axum::http::HeaderValue>()
            .expect("invalid CORS origin");
        layer.allow_origin(origin)
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}

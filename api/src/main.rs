//! feedbot API server
//!
//! Receives slash-command interactions and posts new feed entries back to the
//! channel as embed batches.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ConfiguredBlobStore, DiscordWebhookClient, EnvSecretSource, HttpFeedFetcher};
use app::{CommandRouter, FetchPipeline, InteractionHandler, WatermarkStore};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<dyn InteractionHandler>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Slash-command trigger
        .route("/interactions", post(handlers::post_interaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feedbot_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting feedbot API...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        feeds = config.feeds.len(),
        store = ?config.store,
        gate = %config.gate,
        "Configuration loaded"
    );

    // Create adapters
    let blobs = Arc::new(ConfiguredBlobStore::from_location(&config.store));
    let source = Arc::new(HttpFeedFetcher::new());
    let sink = Arc::new(DiscordWebhookClient::new(config.discord_api_url.clone()));
    let secrets = Arc::new(EnvSecretSource::new());

    // Create application services
    let pipeline = FetchPipeline::new(
        WatermarkStore::new(blobs, config.bucket.clone(), config.namespace.clone()),
        source,
        sink,
        config.feeds.clone(),
        config.gate,
    );
    let router = CommandRouter::new(pipeline, secrets);

    let state = AppState {
        handler: Arc::new(router),
    };

    let app = app_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Activity feed API server
//!
//! Converts repository activity logs into syndication feed items and picks
//! the feed format (RSS or Atom) a request asks for.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{JsonCommitExpander, LocaleCatalog, MarkdownRenderer};
use app::{FeedService, FeedSettings};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<LocaleCatalog, MarkdownRenderer, JsonCommitExpander>>,
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

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/feeds/:name", post(handlers::preview_feed))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting activity feed API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let translator = match &config.locale_path {
        Some(path) => LocaleCatalog::from_json_file(path)?,
        None => LocaleCatalog::english(),
    };
    let renderer = MarkdownRenderer::new(config.markup_max_bytes);

    // Create application services
    let feed_service = Arc::new(FeedService::new(
        Arc::new(translator),
        Arc::new(renderer),
        Arc::new(JsonCommitExpander),
        FeedSettings {
            app_sub_url: config.app_sub_url.clone(),
            no_reply_domain: config.no_reply_address.clone(),
        },
    ));

    let app = router(AppState { feed_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

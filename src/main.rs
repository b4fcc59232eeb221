//! FWI Backend Server
//!
//! Serves a pre-trained Fire Weather Index regression model and proxies
//! domain-restricted questions to an external chat service.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       FWI BACKEND                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────────┐  ┌────────────────┐  │
//! │  │  HTTP     │  │  Inference       │  │  Chat Proxy    │  │
//! │  │  API      │  │  Engine          │  │  (Gemini)      │  │
//! │  │  (Axum)   │  │  (scaler+ridge)  │  │                │  │
//! │  └─────┬─────┘  └────────┬─────────┘  └───────┬────────┘  │
//! │        └─────────────────┼────────────────────┘            │
//! │                          ▼                                 │
//! │            scaler.json / ridge_model.json                  │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod chat;
mod config;
mod error;
mod handlers;
mod inference;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat::gemini::{GeminiClient, GeminiConfig};
use chat::ChatModel;
use inference::InferenceEngine;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fwi_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("FWI Backend starting...");
    tracing::info!("Scaler: {}", config.scaler_path);
    tracing::info!("Model: {}", config.model_path);
    tracing::info!("Chat configured: {}", config.gemini_configured());

    // Build application state
    let engine = Arc::new(InferenceEngine::new(
        &config.scaler_path,
        &config.model_path,
    ));
    let gemini = Arc::new(GeminiClient::new(GeminiConfig {
        api_url: config.gemini_api_url.clone(),
        api_key: config.gemini_api_key.clone(),
        model: config.gemini_model.clone(),
        timeout_seconds: config.chat_timeout_seconds,
    }));

    let state = AppState {
        engine,
        chat: gemini,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<InferenceEngine>,
    pub chat: Arc<dyn ChatModel>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/predict", post(handlers::predict::predict))
        .route("/chat", post(handlers::chat::chat))
        .route("/reset_chat", post(handlers::chat::reset_chat))
        .route("/sample_data", get(handlers::samples::sample_data))
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

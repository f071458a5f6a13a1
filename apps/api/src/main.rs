mod cache;
mod config;
mod errors;
mod letters;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::RedisCache;
use crate::config::Config;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting cover letter service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize Redis
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // Initialize LLM client
    let llm = OpenAiClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state — both adapters behind trait objects so tests can fake them
    let state = AppState {
        cache: Arc::new(RedisCache::new(redis)),
        llm: Arc::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // wide open — run behind a trusted gateway

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

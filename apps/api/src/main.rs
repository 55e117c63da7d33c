use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use optimizer::config::Config;
use optimizer::llm_client::{self, LlmClient};
use optimizer::routes::build_router;
use optimizer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume optimizer v{}", env!("CARGO_PKG_VERSION"));

    // The API key is injected here and nowhere else
    let llm = LlmClient::new(config.anthropic_api_key.clone())
        .with_base_url(config.anthropic_api_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        generator: Arc::new(llm),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

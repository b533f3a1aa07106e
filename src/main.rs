use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use green_pulse_chatbot::{
    config::{Config, DEFAULT_LOG_FILTER},
    routes,
    services::providers::gemini::GeminiProvider,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let provider = GeminiProvider::new(config.gemini.clone())?;
    tracing::info!(model = provider.model(), "Gemini provider configured");

    let state = AppState::new(Arc::new(provider)).shared();

    let app = routes::create_router().with_state(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "Chatbot service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Chatbot service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

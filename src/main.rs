//! LioraWave API server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use liorawave::adapters::http::{app_router, AppState};
use liorawave::adapters::{
    InMemoryBusinessTracker, InMemorySceneStore, MockSceneRenderer, OllamaConfig, OllamaProvider,
};
use liorawave::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    init_tracing(&config.server.log_level, config.server.log_format);

    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        model = %config.ai.model,
        model_url = %config.ai.base_url,
        "Starting LioraWave API"
    );

    let provider = OllamaProvider::new(
        OllamaConfig::new(&config.ai.base_url)
            .with_model(&config.ai.model)
            .with_timeout(config.ai.timeout())
            .with_health_timeout(config.ai.health_timeout()),
    )?;

    let state = AppState::new(
        Arc::new(provider),
        Arc::new(InMemorySceneStore::new()),
        Arc::new(MockSceneRenderer::new(config.render.simulated_delay())),
        Arc::new(InMemoryBusinessTracker::new()),
    )
    .with_temperature(config.ai.temperature)
    .with_public_base_url(config.server.public_base_url());

    let cors_origins = config.server.cors_origins_list();
    if config.is_production() && cors_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS allows any origin in production");
    }

    let router = app_router(
        state,
        &cors_origins,
        std::time::Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured directive.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

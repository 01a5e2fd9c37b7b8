//! Story Studio HTTP server.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use story_studio::adapters::http::{app_router, StudioAppState};
use story_studio::application::handlers::studio::StudioGateway;
use story_studio::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    config.validate().context("Invalid configuration")?;

    let gateway =
        StudioGateway::from_config(&config.ai).context("Failed to build model provider")?;
    if gateway.has_model() {
        tracing::info!(model = %config.ai.model, "language model configured");
    } else {
        tracing::info!("no API key configured, serving deterministic suggestions");
    }

    let app = app_router(StudioAppState::new(gateway), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        %addr,
        request_timeout_secs = config.server.request_timeout_secs,
        model_timeout_secs = config.ai.timeout_secs,
        "Starting Story Studio"
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

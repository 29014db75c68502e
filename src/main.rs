//! Service entrypoint

use anyhow::Context;
use frontdesk::{build_router, build_state, Config, ConsoleNotifier};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let state = build_state(&config, Arc::new(ConsoleNotifier));
    if !state.knowledge.is_empty() {
        info!(facts = state.knowledge.len(), "knowledge base seeded");
    }

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "supervisor panel listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

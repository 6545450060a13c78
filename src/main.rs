// ABOUTME: Entry point for the tickd binary.
// ABOUTME: Initializes tracing, loads config, connects the store, and starts the HTTP server.

use std::sync::Arc;

use tickd_core::CounterEngine;
use tickd_server::{AppState, Config, create_router};
use tickd_store::{RedisStore, RetryPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(bind = %config.bind, "tickd starting up");

    let store = RedisStore::connect(&config.redis_connection_url(), RetryPolicy::default()).await?;
    let engine = CounterEngine::new(Arc::new(store));

    let hostname = gethostname::gethostname().to_string_lossy().into_owned();
    let state = Arc::new(AppState::new(engine, hostname));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}

//! HTTP server entry point.
//!
//! Resolves configuration, constructs the long-lived engine client, and
//! starts the Axum server on port 8080.

mod error;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Result;
use fantasy_config::Config;
use fantasy_engine::EngineClient;
use tracing::info;

use crate::state::ServerState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env();
    info!("ENGINE_BASE_URL: {}", config.engine_base_url);

    let engine = Arc::new(EngineClient::new(&config));
    let state = Arc::new(ServerState {
        config: config.clone(),
        engine,
    });

    let app = routes::router(state);

    info!("web listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

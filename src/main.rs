use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dearsql_site::config::Config;
use dearsql_site::routes::create_routes;
use dearsql_site::state::AppState;
use dearsql_site::utils::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("failed to load config")?;
    let config = Arc::new(config);

    let state = AppState::new(config.clone());

    let app = create_routes().with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        "advertising {} {} from {}",
        config.release.artifact_name,
        config.release.version,
        config.release.base_url
    );
    tracing::info!("dearsql-site running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

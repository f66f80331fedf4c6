//! Fundmatch Web Server
//!
//! Run with: cargo run -p fundmatch-web

use std::net::SocketAddr;

use fundmatch_analytics::AnalyticsEngine;
use fundmatch_web::{config::Config, router::build_router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?;
    info!(
        data_dir = %config.analytics.data_dir.display(),
        cache_ttl_minutes = config.analytics.cache_ttl_minutes,
        "Starting Fundmatch web server"
    );

    let engine = AnalyticsEngine::new(&config.analytics.data_dir, config.cache_ttl());
    let state = AppState::new(engine);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

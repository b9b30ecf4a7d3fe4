//! Tickersense HTTP server
//!
//! Serves sentiment analysis reports over a small JSON API, suitable for
//! a dashboard frontend.
//!
//! # Usage
//! ```sh
//! MODE=demo PORT=8000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `MODE` - Record supplier: `demo` or `replay` (default: demo)
//! - `BIND_ADDRESS` / `PORT` - Listen address (default: 127.0.0.1:8000)
//! - `CORS_ALLOWED_ORIGIN` - Frontend origin (default: http://localhost:5173)
//! - `OBSERVABILITY_ENABLED` - Mount `/metrics` (default: true)

use anyhow::{Context, Result};
use std::sync::Arc;
use tickersense::config::Config;
use tickersense::infrastructure::factory::ServiceFactory;
use tickersense::infrastructure::observability::Metrics;
use tickersense::interfaces::http::routes::{AppState, build_router};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Tickersense Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Mode={:?}, Bind={}:{}",
        config.mode, config.bind_address, config.port
    );

    let metrics = Metrics::new()?;
    let state = Arc::new(AppState {
        analysis: ServiceFactory::create_analysis_service(&config, metrics.clone()),
        demo: ServiceFactory::create_demo_service(&config, metrics.clone()),
        metrics,
    });

    let app = build_router(
        state,
        &config.cors_allowed_origin,
        config.observability_enabled,
    )?;

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on http://{}", addr);
    if config.observability_enabled {
        info!("Metrics exposed at /metrics");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

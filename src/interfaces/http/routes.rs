//! HTTP routes for the analysis service.

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::application::analysis_service::AnalysisService;
use crate::domain::validation::ticker::validate_ticker;
use crate::infrastructure::observability::Metrics;
use crate::interfaces::view_models::ReportViewModel;

/// Shared state behind every route.
pub struct AppState {
    /// Service wired for the configured mode.
    pub analysis: AnalysisService,
    /// Service pinned to demo data, whatever the mode.
    pub demo: AnalysisService,
    pub metrics: Metrics,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the router with all routes and the CORS layer for the frontend
/// origin. The metrics route is mounted only when observability is on.
pub fn build_router(
    state: Arc<AppState>,
    cors_origin: &str,
    expose_metrics: bool,
) -> Result<Router> {
    let origin: HeaderValue = cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin: {cors_origin}"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(service_info))
        .route("/analyze/:ticker", get(analyze_ticker))
        .route("/demo/:ticker", get(demo_ticker));

    if expose_metrics {
        router = router.route("/metrics", get(render_metrics));
    }

    Ok(router.with_state(state).layer(cors))
}

/// Service banner
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "tickersense".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// Analyze a ticker with the configured supplier
pub async fn analyze_ticker(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<ReportViewModel>, (StatusCode, Json<ErrorResponse>)> {
    run_analysis(&state.analysis, &ticker).await
}

/// Analyze a ticker against the curated demo batches
pub async fn demo_ticker(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<ReportViewModel>, (StatusCode, Json<ErrorResponse>)> {
    run_analysis(&state.demo, &ticker).await
}

/// Prometheus text exposition
pub async fn render_metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}

async fn run_analysis(
    service: &AnalysisService,
    ticker: &str,
) -> Result<Json<ReportViewModel>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(reason) = validate_ticker(ticker) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: reason.to_string(),
            }),
        ));
    }

    match service.analyze(ticker).await {
        Ok(report) => Ok(Json(ReportViewModel::from_report(&report))),
        Err(e) => {
            tracing::error!(error = %e, ticker, "Analysis failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Analysis failed".to_string(),
                }),
            ))
        }
    }
}

//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    controls::dashboard_controls,
    dashboard::dashboard_home,
    health::{health, health_detailed, health_ready},
    metrics::{dashboard_metrics, export_data, system_status},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Dashboard
        .route("/", get(dashboard_home))
        .route("/dashboard", get(dashboard_home))
        .route("/dashboard/metrics", get(dashboard_metrics))
        .route("/dashboard/controls", post(dashboard_controls))
        .route("/dashboard/export", get(export_data))
        .route("/dashboard/system-status", get(system_status))

        // Health probes
        .route("/health", get(health))
        .route("/health/detailed", get(health_detailed))
        .route("/health/ready", get(health_ready))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

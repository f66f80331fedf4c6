//! Health, readiness, and detailed status probes.

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::handlers::SERVICE_NAME;
use crate::state::SharedState;

/// GET /health — liveness probe, always succeeds while the process runs.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/detailed — component status plus the engine's data
/// freshness sub-object.
pub async fn health_detailed(State(state): State<SharedState>) -> Json<Value> {
    let data_health = state.engine.get_system_health().await;
    let analytics_status = if data_health["status"] == "unknown" {
        "unhealthy"
    } else {
        "healthy"
    };

    let status = if analytics_status == "unhealthy" {
        "degraded"
    } else {
        "healthy"
    };

    Json(json!({
        "status": status,
        "timestamp": Utc::now(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": (Utc::now() - state.started_at).num_seconds(),
        "components": {
            "api": "healthy",
            "analytics": analytics_status,
            "logging": "healthy",
        },
        "data": data_health,
    }))
}

/// GET /health/ready — readiness for container orchestration: the process
/// is up and the processed-data directory is reachable.
pub async fn health_ready(State(state): State<SharedState>) -> Json<Value> {
    let data_directory = state.engine.data_dir().is_dir();
    let ready = data_directory;

    Json(json!({
        "ready": ready,
        "timestamp": Utc::now(),
        "checks": {
            "api": true,
            "data_directory": data_directory,
        },
    }))
}

//! JSON metric endpoints backed by the analytics engine.

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::SharedState;

/// GET /dashboard/metrics — the combined cached payload.
pub async fn dashboard_metrics(State(state): State<SharedState>) -> Json<Value> {
    Json(state.engine.get_cached_metrics().await)
}

/// GET /dashboard/export — cached payload wrapped with export metadata for
/// external analysis.
pub async fn export_data(State(state): State<SharedState>) -> Json<Value> {
    let analytics = state.engine.get_cached_metrics().await;
    let system_health = state.engine.get_system_health().await;

    Json(json!({
        "export_info": {
            "generated_at": Utc::now(),
            "export_type": "dashboard_data",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "analytics": analytics,
        "system_health": system_health,
    }))
}

/// GET /dashboard/system-status — quick status roll-up for monitors.
pub async fn system_status(State(state): State<SharedState>) -> Json<Value> {
    let health = state.engine.get_system_health().await;

    let status = if health["status"] == "stale" {
        "degraded"
    } else if health["data_freshness_hours"].as_f64().unwrap_or(0.0) > 48.0 {
        "unhealthy"
    } else {
        "healthy"
    };

    Json(json!({
        "status": status,
        "health": health,
        "timestamp": Utc::now(),
    }))
}

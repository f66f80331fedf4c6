//! System control actions triggered from the dashboard.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ControlRequest {
    pub action: String,
    #[serde(default)]
    pub parameters: Option<Value>,
}

/// POST /dashboard/controls
pub async fn dashboard_controls(
    State(state): State<SharedState>,
    Json(request): Json<ControlRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match request.action.to_lowercase().as_str() {
        "clear_cache" => {
            state.engine.clear_cache();
            info!("analytics cache cleared from dashboard");
            Ok(success("Analytics cache cleared successfully"))
        }
        "refresh_metrics" => {
            state.engine.clear_cache();
            state.engine.get_cached_metrics().await;
            info!("metrics refreshed from dashboard");
            Ok(success("Metrics refreshed successfully"))
        }
        other => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": format!("Unknown action: {other}"),
                "timestamp": Utc::now(),
            })),
        )),
    }
}

fn success(message: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": message,
        "timestamp": Utc::now(),
    }))
}

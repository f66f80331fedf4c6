//! Shared application state for the web server.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fundmatch_analytics::AnalyticsEngine;

/// Shared state injected into every Axum handler. The analytics engine is
/// constructed once in `main` and owned here; handlers only borrow it.
pub struct AppState {
    pub engine: AnalyticsEngine,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(engine: AnalyticsEngine) -> Self {
        Self {
            engine,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<AppState>;

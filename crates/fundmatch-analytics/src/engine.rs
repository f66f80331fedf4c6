//! Aggregation and cache layer over the four metric calculators.
//!
//! The engine is constructed once by the composition root and handed to
//! collaborators by reference; there is no global instance. Snapshots are
//! plain `serde_json::Value` nested maps so the presentation layer can
//! render them without knowing the calculator types.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::{debug, error, info};

use fundmatch_common::{FundmatchError, Result};

use crate::effectiveness::recommendation_effectiveness;
use crate::insights::research_insights;
use crate::loader::DataStore;
use crate::overview::system_overview;
use crate::performance::agent_performance;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

struct CacheEntry {
    payload: Value,
    stored_at: Instant,
}

/// Metrics aggregation engine with a TTL cache.
///
/// Every public accessor returns a self-describing snapshot: it always
/// carries a `timestamp` (or `generated_at`) field, and any internal
/// failure is folded into an `{error, message, timestamp}` object instead
/// of surfacing to the caller.
pub struct AnalyticsEngine {
    store: DataStore,
    cache_ttl: Duration,
    cache: Mutex<Option<CacheEntry>>,
}

impl AnalyticsEngine {
    pub fn new(data_dir: impl Into<PathBuf>, cache_ttl: Duration) -> Self {
        Self {
            store: DataStore::new(data_dir),
            cache_ttl,
            cache: Mutex::new(None),
        }
    }

    pub fn with_default_ttl(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(data_dir, DEFAULT_CACHE_TTL)
    }

    pub fn data_dir(&self) -> &Path {
        self.store.root()
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// System overview snapshot: counts, match quality, data freshness.
    pub async fn get_system_overview(&self) -> Value {
        let now = Utc::now();
        self.snapshot_or_error(
            "Failed to generate system overview",
            now,
            self.system_overview_inner(now).await,
        )
    }

    /// Per-agent performance snapshot.
    pub async fn get_agent_performance(&self) -> Value {
        let now = Utc::now();
        self.snapshot_or_error(
            "Failed to generate agent performance metrics",
            now,
            self.agent_performance_inner(now).await,
        )
    }

    /// Rolling-window effectiveness snapshot.
    pub async fn get_recommendation_effectiveness(&self) -> Value {
        let now = Utc::now();
        self.snapshot_or_error(
            "Failed to calculate recommendation effectiveness",
            now,
            self.recommendation_effectiveness_inner(now).await,
        )
    }

    /// Research trends and idea quality snapshot.
    pub async fn get_research_insights(&self) -> Value {
        let now = Utc::now();
        self.snapshot_or_error(
            "Failed to generate research insights",
            now,
            self.research_insights_inner(now).await,
        )
    }

    /// Combined payload of all four snapshots, cached for the configured
    /// TTL. A warm cache returns the stored payload unchanged; a cold cache
    /// fans the calculators out concurrently, merges their results (each
    /// calculator isolates its own failures), and replaces the cache slot
    /// wholesale.
    pub async fn get_cached_metrics(&self) -> Value {
        if let Some(payload) = self.cached_payload() {
            debug!("returning cached dashboard metrics");
            return payload;
        }

        info!("generating fresh dashboard metrics");
        let (overview, performance, effectiveness, insights) = tokio::join!(
            self.get_system_overview(),
            self.get_agent_performance(),
            self.get_recommendation_effectiveness(),
            self.get_research_insights(),
        );

        let payload = json!({
            "system_overview": overview,
            "agent_performance": performance,
            "recommendation_effectiveness": effectiveness,
            "research_insights": insights,
            "generated_at": Utc::now(),
            "cache_ttl_minutes": self.cache_ttl.as_secs() / 60,
        });

        *self.cache_slot() = Some(CacheEntry {
            payload: payload.clone(),
            stored_at: Instant::now(),
        });
        payload
    }

    /// Drop the cached payload so the next read recomputes. Safe to call
    /// while a computation is in flight; the in-flight result is stored
    /// afterwards, last write wins.
    pub fn clear_cache(&self) {
        *self.cache_slot() = None;
        info!("analytics cache cleared");
    }

    /// Narrow accessor for health probes: just the `system_health`
    /// sub-object of a fresh overview, or `{"status": "unknown"}` if the
    /// overview itself errored.
    pub async fn get_system_health(&self) -> Value {
        let overview = self.get_system_overview().await;
        if overview.get("error").is_some() {
            return json!({ "status": "unknown" });
        }
        overview
            .get("system_health")
            .cloned()
            .unwrap_or_else(|| json!({ "status": "unknown" }))
    }

    async fn system_overview_inner(&self, now: DateTime<Utc>) -> Result<Value> {
        let matches = self.store.matches().await?;
        let ideas = self.store.ideas().await?;
        let collaborators = self.store.collaborator_suggestions().await?;
        let notifications = self.store.notifications().await?;
        Ok(serde_json::to_value(system_overview(
            &matches,
            &ideas,
            &collaborators,
            &notifications,
            now,
        ))?)
    }

    async fn agent_performance_inner(&self, now: DateTime<Utc>) -> Result<Value> {
        let matches = self.store.matches().await?;
        let ideas = self.store.ideas().await?;
        let collaborators = self.store.collaborator_suggestions().await?;
        let notifications = self.store.notifications().await?;
        Ok(serde_json::to_value(agent_performance(
            &matches,
            &ideas,
            &collaborators,
            &notifications,
            now,
        ))?)
    }

    async fn recommendation_effectiveness_inner(&self, now: DateTime<Utc>) -> Result<Value> {
        let matches = self.store.matches().await?;
        Ok(serde_json::to_value(recommendation_effectiveness(
            &matches, now,
        ))?)
    }

    async fn research_insights_inner(&self, now: DateTime<Utc>) -> Result<Value> {
        let matches = self.store.matches().await?;
        let ideas = self.store.ideas().await?;
        Ok(serde_json::to_value(research_insights(
            &matches, &ideas, now,
        ))?)
    }

    fn snapshot_or_error(
        &self,
        what: &str,
        now: DateTime<Utc>,
        result: Result<Value>,
    ) -> Value {
        match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "{what}");
                error_snapshot(what, &e, now)
            }
        }
    }

    fn cached_payload(&self) -> Option<Value> {
        let slot = self.cache_slot();
        slot.as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.cache_ttl)
            .map(|entry| entry.payload.clone())
    }

    // Cache writes are wholesale replacements, so a slot left behind by a
    // panicking writer is still coherent; recover instead of propagating
    // the poison.
    fn cache_slot(&self) -> MutexGuard<'_, Option<CacheEntry>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn error_snapshot(what: &str, err: &FundmatchError, now: DateTime<Utc>) -> Value {
    json!({
        "error": what,
        "message": err.to_string(),
        "timestamp": now,
    })
}

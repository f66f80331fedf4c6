//! fundmatch-analytics — Metrics aggregation and caching engine for the
//! faculty-to-funding matching pipeline.
//!
//! Aggregates the JSON snapshots written by the pipeline agents (matches,
//! research ideas, collaborator suggestions, notifications) into dashboard
//! metrics:
//!   - System overview with match quality distribution and data freshness
//!   - Per-agent performance metrics
//!   - Recommendation effectiveness over rolling time windows
//!   - Research area / methodology insights
//!
//! All four calculators run concurrently behind a TTL cache; a failure in
//! one calculator is converted into a structured error snapshot and never
//! takes down the combined payload.

pub mod effectiveness;
pub mod engine;
pub mod insights;
pub mod loader;
pub mod overview;
pub mod performance;
pub mod records;

pub use engine::{AnalyticsEngine, DEFAULT_CACHE_TTL};
pub use loader::DataStore;

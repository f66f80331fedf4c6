//! fundmatch-web — Admin dashboard for the Fundmatch matching pipeline.
//! Thin presentation layer over the analytics engine:
//!   - HTML dashboard with auto-refreshing metric cards
//!   - JSON metrics, export, and control endpoints
//!   - Health, readiness, and system status probes

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

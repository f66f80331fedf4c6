pub mod controls;
pub mod dashboard;
pub mod health;
pub mod metrics;

/// Service identity reported by health endpoints and exports.
pub const SERVICE_NAME: &str = "Fundmatch Faculty Funding Notifier";

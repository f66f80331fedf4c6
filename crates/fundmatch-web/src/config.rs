//! Configuration loading for Fundmatch.
//! Reads fundmatch.toml from the current directory or the path in the
//! FUNDMATCH_CONFIG env var; a missing file falls back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use fundmatch_common::{FundmatchError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data/processed") }
fn default_cache_ttl_minutes() -> u64 { 15 }

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = std::env::var("FUNDMATCH_CONFIG")
            .unwrap_or_else(|_| "fundmatch.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            FundmatchError::Config(format!("{}: {e}", path.display()))
        })
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.analytics.cache_ttl_minutes * 60)
    }
}

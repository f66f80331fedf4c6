//! Loads the processed-data JSON files written by the pipeline agents.
//!
//! Each agent drops timestamped files into a shared directory. A file is
//! either a JSON array of records or a single record object. Files that
//! fail to read or parse are logged and skipped; one bad file never aborts
//! a load.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use serde_json::Value;
use tracing::warn;

use fundmatch_common::Result;

use crate::records::{CollaboratorRecord, IdeaRecord, MatchRecord, NotificationRecord};

pub const MATCHES_PATTERN: &str = "faculty_funding_matches_*.json";
pub const IDEAS_PATTERN: &str = "research_ideas_*.json";
pub const COLLABORATORS_PATTERN: &str = "collaborator_suggestions_*.json";
pub const NOTIFICATIONS_PATTERN: &str = "notifications_*.json";

/// File-backed store of processed pipeline output.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every record from files under the root matching `pattern`.
    ///
    /// Returns records in glob-iteration order, then within-file order.
    /// The whole collection is materialized; the data scale is small enough
    /// that streaming is not worth the complexity.
    pub async fn load(&self, pattern: &str) -> Result<Vec<Value>> {
        let full_pattern = self.root.join(pattern);
        let paths = glob::glob(&full_pattern.to_string_lossy())?;

        let mut records = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(error = %e, "Unreadable path while globbing data files");
                    continue;
                }
            };
            match read_records(&path).await {
                Ok(mut found) => records.append(&mut found),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unloadable data file");
                }
            }
        }
        Ok(records)
    }

    pub async fn matches(&self) -> Result<Vec<MatchRecord>> {
        let raw = self.load(MATCHES_PATTERN).await?;
        Ok(raw.iter().map(MatchRecord::from_value).collect())
    }

    pub async fn ideas(&self) -> Result<Vec<IdeaRecord>> {
        let raw = self.load(IDEAS_PATTERN).await?;
        Ok(raw.iter().map(IdeaRecord::from_value).collect())
    }

    pub async fn collaborator_suggestions(&self) -> Result<Vec<CollaboratorRecord>> {
        let raw = self.load(COLLABORATORS_PATTERN).await?;
        Ok(raw.iter().map(CollaboratorRecord::from_value).collect())
    }

    pub async fn notifications(&self) -> Result<Vec<NotificationRecord>> {
        let raw = self.load(NOTIFICATIONS_PATTERN).await?;
        Ok(raw.iter().map(NotificationRecord::from_value).collect())
    }
}

async fn read_records(path: &Path) -> Result<Vec<Value>> {
    let raw = tokio::fs::read_to_string(path).await?;
    match serde_json::from_str::<Value>(&raw)? {
        Value::Array(items) => Ok(items),
        v @ Value::Object(_) => Ok(vec![v]),
        other => Err(anyhow!("expected JSON array or object, got {}", json_type(&other)).into()),
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

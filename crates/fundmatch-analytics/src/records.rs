//! Typed views over the loosely-structured JSON records written by the
//! pipeline agents.
//!
//! The agents serialize with best-effort schemas, so every field here is
//! optional and parsed with a fallback. Keeping the raw `Option` alongside
//! the defaulting accessor lets calculators (and tests) distinguish
//! "field present and zero" from "field absent".

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Parse a `created_date` string as the agents write it.
///
/// Accepts RFC 3339 as well as naive ISO-8601 timestamps, which are
/// interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn f64_field(v: &Value, key: &str) -> Option<f64> {
    v.get(key).and_then(Value::as_f64)
}

fn str_list(v: &Value, key: &str) -> Vec<String> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// A computed pairing between a faculty profile and a funding opportunity.
#[derive(Debug, Clone, Default)]
pub struct MatchRecord {
    pub created_date: Option<DateTime<Utc>>,
    pub total_score: Option<f64>,
    pub faculty_response: Option<String>,
    pub research_areas: Vec<String>,
    pub career_stage: Option<String>,
}

impl MatchRecord {
    pub fn from_value(v: &Value) -> Self {
        Self {
            created_date: v
                .get("created_date")
                .and_then(Value::as_str)
                .and_then(parse_timestamp),
            total_score: v
                .get("match_score")
                .and_then(|score| score.get("total_score"))
                .and_then(Value::as_f64),
            faculty_response: str_field(v, "faculty_response").filter(|s| !s.is_empty()),
            research_areas: str_list(v, "research_areas"),
            career_stage: str_field(v, "career_stage"),
        }
    }

    /// Composite match score, 0.0 when unscored.
    pub fn score(&self) -> f64 {
        self.total_score.unwrap_or(0.0)
    }

    /// Creation time, Unix epoch when absent or malformed.
    pub fn created(&self) -> DateTime<Utc> {
        self.created_date.unwrap_or(DateTime::UNIX_EPOCH)
    }

    pub fn has_response(&self) -> bool {
        self.faculty_response.is_some()
    }
}

/// A generated research idea with its risk/ambition variant and quality
/// scores.
#[derive(Debug, Clone, Default)]
pub struct IdeaRecord {
    pub variant_type: Option<String>,
    pub innovation_level: Option<f64>,
    pub feasibility_score: Option<f64>,
    pub impact_potential: Option<f64>,
    pub methodology: Vec<String>,
}

impl IdeaRecord {
    pub fn from_value(v: &Value) -> Self {
        Self {
            variant_type: str_field(v, "variant_type"),
            innovation_level: f64_field(v, "innovation_level"),
            feasibility_score: f64_field(v, "feasibility_score"),
            impact_potential: f64_field(v, "impact_potential"),
            methodology: str_list(v, "methodology"),
        }
    }

    /// Variant label, defaulting to `conservative` when absent.
    pub fn variant(&self) -> &str {
        self.variant_type.as_deref().unwrap_or("conservative")
    }

    /// Innovation score for averaging. Zero is treated as unscored, matching
    /// the idea agent which emits 0 for ideas that were never rated.
    pub fn innovation(&self) -> Option<f64> {
        self.innovation_level.filter(|s| *s != 0.0)
    }

    pub fn feasibility(&self) -> Option<f64> {
        self.feasibility_score.filter(|s| *s != 0.0)
    }

    pub fn impact(&self) -> Option<f64> {
        self.impact_potential.filter(|s| *s != 0.0)
    }
}

/// A suggested collaborator for a matched faculty member.
#[derive(Debug, Clone, Default)]
pub struct CollaboratorRecord {
    pub relevance_score: Option<f64>,
}

impl CollaboratorRecord {
    pub fn from_value(v: &Value) -> Self {
        Self {
            relevance_score: f64_field(v, "relevance_score"),
        }
    }

    pub fn relevance(&self) -> f64 {
        self.relevance_score.unwrap_or(0.0)
    }
}

/// A notification dispatched (or queued) for a match.
#[derive(Debug, Clone, Default)]
pub struct NotificationRecord {
    pub sent: bool,
}

impl NotificationRecord {
    pub fn from_value(v: &Value) -> Self {
        Self {
            sent: v.get("sent").and_then(Value::as_bool).unwrap_or(false),
        }
    }
}

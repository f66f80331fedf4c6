//! System overview metrics: collection counts, match quality distribution,
//! and data freshness health.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::records::{CollaboratorRecord, IdeaRecord, MatchRecord, NotificationRecord};

/// Hours of data silence before the system is reported stale.
const STALE_AFTER_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Serialize)]
pub struct SystemOverview {
    pub overview: OverviewCounts,
    pub match_quality: QualityBuckets,
    pub system_health: SystemHealth,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewCounts {
    pub total_matches: usize,
    pub total_ideas: usize,
    pub total_collaborator_suggestions: usize,
    pub total_notifications: usize,
    pub recent_matches_7d: usize,
}

/// Match quality distribution. Bucket boundaries are inclusive on the lower
/// edge: a score of exactly 0.8 is high, exactly 0.6 is medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualityBuckets {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl QualityBuckets {
    pub fn tally(scores: impl Iterator<Item = f64>) -> Self {
        let mut buckets = Self::default();
        for score in scores {
            if score >= 0.8 {
                buckets.high += 1;
            } else if score >= 0.6 {
                buckets.medium += 1;
            } else {
                buckets.low += 1;
            }
        }
        buckets
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Stale,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemHealth {
    pub status: HealthStatus,
    pub last_data_update: Option<DateTime<Utc>>,
    pub data_freshness_hours: f64,
}

/// Freshness health derived from the most recent match timestamp.
/// With no matches at all there is nothing to be stale about, so the
/// status stays healthy.
pub fn data_health(matches: &[MatchRecord], now: DateTime<Utc>) -> SystemHealth {
    match matches.iter().map(|m| m.created()).max() {
        None => SystemHealth {
            status: HealthStatus::Healthy,
            last_data_update: None,
            data_freshness_hours: 0.0,
        },
        Some(latest) => {
            let hours = (now - latest).num_milliseconds() as f64 / 3_600_000.0;
            let status = if hours > STALE_AFTER_HOURS {
                HealthStatus::Stale
            } else {
                HealthStatus::Healthy
            };
            SystemHealth {
                status,
                last_data_update: Some(latest),
                data_freshness_hours: hours,
            }
        }
    }
}

pub fn system_overview(
    matches: &[MatchRecord],
    ideas: &[IdeaRecord],
    collaborators: &[CollaboratorRecord],
    notifications: &[NotificationRecord],
    now: DateTime<Utc>,
) -> SystemOverview {
    let seven_days_ago = now - Duration::days(7);
    let recent_matches_7d = matches
        .iter()
        .filter(|m| m.created() > seven_days_ago)
        .count();

    SystemOverview {
        overview: OverviewCounts {
            total_matches: matches.len(),
            total_ideas: ideas.len(),
            total_collaborator_suggestions: collaborators.len(),
            total_notifications: notifications.len(),
            recent_matches_7d,
        },
        match_quality: QualityBuckets::tally(matches.iter().map(|m| m.score())),
        system_health: data_health(matches, now),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_with(score: f64, created: DateTime<Utc>) -> MatchRecord {
        MatchRecord {
            created_date: Some(created),
            total_score: Some(score),
            ..Default::default()
        }
    }

    #[test]
    fn quality_bucket_boundaries() {
        let buckets = QualityBuckets::tally([0.8, 0.6, 0.59999].into_iter());
        assert_eq!(buckets.high, 1);
        assert_eq!(buckets.medium, 1);
        assert_eq!(buckets.low, 1);
    }

    #[test]
    fn quality_buckets_partition_all_matches() {
        let now = Utc::now();
        let matches: Vec<_> = [0.85, 0.62, 0.92, 0.1, 0.0]
            .iter()
            .map(|&s| match_with(s, now))
            .collect();
        let overview = system_overview(&matches, &[], &[], &[], now);
        assert_eq!(overview.match_quality.total(), matches.len());
    }

    #[test]
    fn recent_window_is_strictly_after_seven_days_ago() {
        let now = Utc::now();
        let matches = vec![
            match_with(0.85, now - Duration::days(3)),
            match_with(0.62, now - Duration::days(6)),
            match_with(0.92, now - Duration::days(8)),
        ];
        let overview = system_overview(&matches, &[], &[], &[], now);
        assert_eq!(overview.overview.recent_matches_7d, 2);
    }

    #[test]
    fn three_recent_matches_scenario() {
        let now = Utc::now();
        let matches = vec![
            match_with(0.85, now - Duration::days(1)),
            match_with(0.62, now - Duration::days(2)),
            match_with(0.92, now - Duration::days(3)),
        ];
        let overview = system_overview(&matches, &[], &[], &[], now);
        assert_eq!(overview.match_quality.high, 2);
        assert_eq!(overview.match_quality.medium, 1);
        assert_eq!(overview.match_quality.low, 0);
        assert_eq!(overview.overview.recent_matches_7d, 3);
        assert_eq!(overview.system_health.status, HealthStatus::Healthy);
    }

    #[test]
    fn stale_after_thirty_hours() {
        let now = Utc::now();
        let matches = vec![match_with(0.7, now - Duration::hours(30))];
        let health = data_health(&matches, now);
        assert_eq!(health.status, HealthStatus::Stale);
        assert!((health.data_freshness_hours - 30.0).abs() < 0.01);
    }

    #[test]
    fn empty_matches_report_healthy_with_no_update() {
        let now = Utc::now();
        let overview = system_overview(&[], &[], &[], &[], now);
        assert_eq!(overview.overview.total_matches, 0);
        assert_eq!(overview.match_quality, QualityBuckets::default());
        assert_eq!(overview.system_health.status, HealthStatus::Healthy);
        assert_eq!(overview.system_health.last_data_update, None);
        assert_eq!(overview.system_health.data_freshness_hours, 0.0);
    }

    #[test]
    fn missing_created_date_defaults_to_epoch_and_reads_stale() {
        let now = Utc::now();
        let matches = vec![MatchRecord {
            total_score: Some(0.9),
            ..Default::default()
        }];
        let health = data_health(&matches, now);
        assert_eq!(health.status, HealthStatus::Stale);
        assert_eq!(health.last_data_update, Some(DateTime::UNIX_EPOCH));
    }
}

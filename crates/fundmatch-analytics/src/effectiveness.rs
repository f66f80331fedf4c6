//! Recommendation effectiveness over rolling time windows, with a simple
//! volume trend comparing the last 30 days against the 30 days before.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::overview::QualityBuckets;
use crate::records::MatchRecord;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationEffectiveness {
    pub effectiveness_by_period: EffectivenessByPeriod,
    pub trends: Trends,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectivenessByPeriod {
    pub last_7_days: PeriodMetrics,
    pub last_30_days: PeriodMetrics,
    pub last_90_days: PeriodMetrics,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PeriodMetrics {
    pub total_matches: usize,
    pub avg_score: f64,
    pub score_distribution: QualityBuckets,
    pub response_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    #[default]
    Stable,
    Decreasing,
}

/// Quality and response trends are emitted for API stability but not yet
/// computed; only the volume trend carries signal.
/// TODO: derive quality_trend from avg_score deltas once enough history
/// accumulates to make the comparison meaningful.
#[derive(Debug, Clone, Serialize)]
pub struct Trends {
    pub match_volume_trend: Trend,
    pub quality_trend: Trend,
    pub response_trend: Trend,
}

fn period_metrics(matches: &[MatchRecord], cutoff: DateTime<Utc>) -> PeriodMetrics {
    let in_window: Vec<&MatchRecord> =
        matches.iter().filter(|m| m.created() > cutoff).collect();
    if in_window.is_empty() {
        return PeriodMetrics::default();
    }

    let scores: Vec<f64> = in_window.iter().map(|m| m.score()).collect();
    let avg_score = scores.iter().sum::<f64>() / scores.len() as f64;
    let responses = in_window.iter().filter(|m| m.has_response()).count();

    PeriodMetrics {
        total_matches: in_window.len(),
        avg_score,
        score_distribution: QualityBuckets::tally(scores.iter().copied()),
        response_rate: responses as f64 / in_window.len() as f64,
    }
}

/// Volume trend: last 30 days vs the (60, 30]-days-ago window, half-open on
/// the lower edge. More than a 10% swing in either direction counts as a
/// trend; an empty previous window reads as stable.
fn volume_trend(matches: &[MatchRecord], current: usize, now: DateTime<Utc>) -> Trend {
    let previous_start = now - Duration::days(60);
    let previous_end = now - Duration::days(30);
    let previous = matches
        .iter()
        .filter(|m| {
            let created = m.created();
            previous_start < created && created <= previous_end
        })
        .count();

    if previous == 0 {
        return Trend::Stable;
    }
    let current = current as f64;
    let previous = previous as f64;
    if current > previous * 1.1 {
        Trend::Increasing
    } else if current < previous * 0.9 {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

pub fn recommendation_effectiveness(
    matches: &[MatchRecord],
    now: DateTime<Utc>,
) -> RecommendationEffectiveness {
    let effectiveness_by_period = EffectivenessByPeriod {
        last_7_days: period_metrics(matches, now - Duration::days(7)),
        last_30_days: period_metrics(matches, now - Duration::days(30)),
        last_90_days: period_metrics(matches, now - Duration::days(90)),
    };

    let trends = Trends {
        match_volume_trend: volume_trend(
            matches,
            effectiveness_by_period.last_30_days.total_matches,
            now,
        ),
        quality_trend: Trend::Stable,
        response_trend: Trend::Stable,
    };

    RecommendationEffectiveness {
        effectiveness_by_period,
        trends,
        timestamp: now,
    }
}

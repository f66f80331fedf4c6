//! Per-agent performance metrics, computed independently per collection.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::{CollaboratorRecord, IdeaRecord, MatchRecord, NotificationRecord};

#[derive(Debug, Clone, Serialize)]
pub struct AgentPerformance {
    pub matcher_agent: MatcherPerformance,
    pub idea_agent: IdeaPerformance,
    pub collaborator_agent: CollaboratorPerformance,
    pub notification_agent: NotificationPerformance,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatcherPerformance {
    pub total_matches: usize,
    pub avg_score: f64,
    pub high_quality_matches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdeaPerformance {
    pub total_ideas: usize,
    pub variant_distribution: VariantDistribution,
    pub avg_innovation_score: f64,
}

/// Fixed variant categories. Absent `variant_type` counts as conservative;
/// labels outside the three known categories are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VariantDistribution {
    pub conservative: usize,
    pub innovative: usize,
    pub stretch: usize,
}

impl VariantDistribution {
    fn record(&mut self, variant: &str) {
        match variant {
            "conservative" => self.conservative += 1,
            "innovative" => self.innovative += 1,
            "stretch" => self.stretch += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollaboratorPerformance {
    pub total_suggestions: usize,
    pub avg_relevance_score: f64,
    pub high_relevance_suggestions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationPerformance {
    pub total_notifications: usize,
    pub sent_notifications: usize,
    pub success_rate: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn agent_performance(
    matches: &[MatchRecord],
    ideas: &[IdeaRecord],
    collaborators: &[CollaboratorRecord],
    notifications: &[NotificationRecord],
    now: DateTime<Utc>,
) -> AgentPerformance {
    let matcher_agent = MatcherPerformance {
        total_matches: matches.len(),
        avg_score: mean(matches.iter().map(|m| m.score())),
        high_quality_matches: matches.iter().filter(|m| m.score() >= 0.8).count(),
    };

    let mut variant_distribution = VariantDistribution::default();
    for idea in ideas {
        variant_distribution.record(idea.variant());
    }
    let idea_agent = IdeaPerformance {
        total_ideas: ideas.len(),
        variant_distribution,
        avg_innovation_score: mean(ideas.iter().filter_map(|i| i.innovation())),
    };

    let collaborator_agent = CollaboratorPerformance {
        total_suggestions: collaborators.len(),
        avg_relevance_score: mean(collaborators.iter().map(|c| c.relevance())),
        high_relevance_suggestions: collaborators
            .iter()
            .filter(|c| c.relevance() >= 0.8)
            .count(),
    };

    let sent_notifications = notifications.iter().filter(|n| n.sent).count();
    let success_rate = if notifications.is_empty() {
        0.0
    } else {
        sent_notifications as f64 / notifications.len() as f64
    };
    let notification_agent = NotificationPerformance {
        total_notifications: notifications.len(),
        sent_notifications,
        success_rate,
    };

    AgentPerformance {
        matcher_agent,
        idea_agent,
        collaborator_agent,
        notification_agent,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(variant: Option<&str>, innovation: Option<f64>) -> IdeaRecord {
        IdeaRecord {
            variant_type: variant.map(str::to_owned),
            innovation_level: innovation,
            ..Default::default()
        }
    }

    #[test]
    fn matcher_metrics_over_three_matches() {
        let now = Utc::now();
        let matches: Vec<_> = [0.85, 0.62, 0.92]
            .iter()
            .map(|&s| MatchRecord {
                total_score: Some(s),
                ..Default::default()
            })
            .collect();
        let perf = agent_performance(&matches, &[], &[], &[], now);
        assert_eq!(perf.matcher_agent.total_matches, 3);
        assert!((perf.matcher_agent.avg_score - 0.796_666).abs() < 1e-3);
        assert_eq!(perf.matcher_agent.high_quality_matches, 2);
    }

    #[test]
    fn empty_collections_report_zero_rates() {
        let perf = agent_performance(&[], &[], &[], &[], Utc::now());
        assert_eq!(perf.matcher_agent.avg_score, 0.0);
        assert_eq!(perf.idea_agent.avg_innovation_score, 0.0);
        assert_eq!(perf.collaborator_agent.avg_relevance_score, 0.0);
        assert_eq!(perf.notification_agent.success_rate, 0.0);
    }

    #[test]
    fn variant_distribution_one_of_each() {
        let ideas = vec![
            idea(Some("innovative"), None),
            idea(Some("conservative"), None),
            idea(Some("stretch"), None),
        ];
        let perf = agent_performance(&[], &ideas, &[], &[], Utc::now());
        let dist = perf.idea_agent.variant_distribution;
        assert_eq!(dist.conservative, 1);
        assert_eq!(dist.innovative, 1);
        assert_eq!(dist.stretch, 1);
    }

    #[test]
    fn absent_variant_counts_as_conservative() {
        let ideas = vec![idea(None, None), idea(Some("bold"), None)];
        let perf = agent_performance(&[], &ideas, &[], &[], Utc::now());
        let dist = perf.idea_agent.variant_distribution;
        assert_eq!(dist.conservative, 1);
        assert_eq!(dist.innovative, 0);
        assert_eq!(dist.stretch, 0);
    }

    #[test]
    fn innovation_average_excludes_zero_and_absent() {
        let ideas = vec![
            idea(None, Some(0.8)),
            idea(None, Some(0.6)),
            idea(None, Some(0.0)),
            idea(None, None),
        ];
        let perf = agent_performance(&[], &ideas, &[], &[], Utc::now());
        assert!((perf.idea_agent.avg_innovation_score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn notification_success_rate_two_of_three() {
        let notifications = vec![
            NotificationRecord { sent: true },
            NotificationRecord { sent: true },
            NotificationRecord { sent: false },
        ];
        let perf = agent_performance(&[], &[], &[], &notifications, Utc::now());
        assert_eq!(perf.notification_agent.sent_notifications, 2);
        assert!((perf.notification_agent.success_rate - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn high_relevance_threshold_is_inclusive() {
        let collaborators = vec![
            CollaboratorRecord {
                relevance_score: Some(0.8),
            },
            CollaboratorRecord {
                relevance_score: Some(0.75),
            },
        ];
        let perf = agent_performance(&[], &[], &collaborators, &[], Utc::now());
        assert_eq!(perf.collaborator_agent.high_relevance_suggestions, 1);
        assert!((perf.collaborator_agent.avg_relevance_score - 0.775).abs() < 1e-9);
    }
}

//! Research pattern insights: research-area and methodology frequency
//! rankings, career-stage distribution, and idea quality averages.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::{IdeaRecord, MatchRecord};

const TOP_N: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct ResearchInsights {
    pub research_trends: ResearchTrends,
    pub idea_quality_metrics: IdeaQualityMetrics,
    pub insights: HeadlineInsights,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchTrends {
    pub top_research_areas: Vec<(String, usize)>,
    pub top_methodologies: Vec<(String, usize)>,
    pub career_stage_distribution: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdeaQualityMetrics {
    pub avg_innovation_level: f64,
    pub avg_feasibility_score: f64,
    pub avg_impact_potential: f64,
    pub total_ideas: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadlineInsights {
    pub most_active_research_area: String,
    pub most_common_methodology: String,
    pub dominant_career_stage: String,
}

/// Insertion-ordered frequency tally. Ranking sorts by descending count
/// with a stable sort, so ties break first-seen-wins — this keeps top-N
/// output reproducible across runs over the same files.
#[derive(Debug, Default)]
struct FrequencyTable {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    fn add(&mut self, key: String) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    fn ranked(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries = self.ranked();
        entries.truncate(n);
        entries
    }

    fn most_frequent(&self) -> Option<String> {
        self.ranked().into_iter().next().map(|(key, _)| key)
    }
}

fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
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

pub fn research_insights(
    matches: &[MatchRecord],
    ideas: &[IdeaRecord],
    now: DateTime<Utc>,
) -> ResearchInsights {
    let mut research_areas = FrequencyTable::default();
    let mut career_stages = FrequencyTable::default();
    for m in matches {
        for area in &m.research_areas {
            research_areas.add(area.to_lowercase());
        }
        // Career stages are tallied as-written, not case-normalized.
        career_stages.add(m.career_stage.clone().unwrap_or_else(|| "unknown".to_owned()));
    }

    let mut methodologies = FrequencyTable::default();
    for idea in ideas {
        for method in &idea.methodology {
            methodologies.add(method.clone());
        }
    }

    let idea_quality_metrics = IdeaQualityMetrics {
        avg_innovation_level: mean_of(ideas.iter().filter_map(|i| i.innovation())),
        avg_feasibility_score: mean_of(ideas.iter().filter_map(|i| i.feasibility())),
        avg_impact_potential: mean_of(ideas.iter().filter_map(|i| i.impact())),
        total_ideas: ideas.len(),
    };

    let insights = HeadlineInsights {
        most_active_research_area: research_areas
            .most_frequent()
            .unwrap_or_else(|| "unknown".to_owned()),
        most_common_methodology: methodologies
            .most_frequent()
            .unwrap_or_else(|| "unknown".to_owned()),
        dominant_career_stage: career_stages
            .most_frequent()
            .unwrap_or_else(|| "unknown".to_owned()),
    };

    ResearchInsights {
        research_trends: ResearchTrends {
            top_research_areas: research_areas.top(TOP_N),
            top_methodologies: methodologies.top(TOP_N),
            career_stage_distribution: career_stages.counts.into_iter().collect(),
        },
        idea_quality_metrics,
        insights,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_with_areas(areas: &[&str], stage: Option<&str>) -> MatchRecord {
        MatchRecord {
            research_areas: areas.iter().map(|a| a.to_string()).collect(),
            career_stage: stage.map(str::to_owned),
            ..Default::default()
        }
    }

    fn idea_with_methods(methods: &[&str]) -> IdeaRecord {
        IdeaRecord {
            methodology: methods.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn research_areas_are_lowercased_and_merged() {
        let matches = vec![
            match_with_areas(&["Machine Learning", "genomics"], None),
            match_with_areas(&["machine learning"], None),
        ];
        let insights = research_insights(&matches, &[], Utc::now());
        let top = &insights.research_trends.top_research_areas;
        assert_eq!(top[0], ("machine learning".to_owned(), 2));
        assert_eq!(insights.insights.most_active_research_area, "machine learning");
    }

    #[test]
    fn ties_break_first_seen() {
        let matches = vec![match_with_areas(&["alpha", "beta"], None)];
        let insights = research_insights(&matches, &[], Utc::now());
        let top = &insights.research_trends.top_research_areas;
        assert_eq!(top[0].0, "alpha");
        assert_eq!(top[1].0, "beta");
    }

    #[test]
    fn top_list_is_capped_at_ten() {
        let areas: Vec<String> = (0..15).map(|i| format!("area-{i}")).collect();
        let refs: Vec<&str> = areas.iter().map(String::as_str).collect();
        let matches = vec![match_with_areas(&refs, None)];
        let insights = research_insights(&matches, &[], Utc::now());
        assert_eq!(insights.research_trends.top_research_areas.len(), 10);
    }

    #[test]
    fn career_stage_defaults_to_unknown() {
        let matches = vec![
            match_with_areas(&[], Some("early_career")),
            match_with_areas(&[], None),
            match_with_areas(&[], Some("early_career")),
        ];
        let insights = research_insights(&matches, &[], Utc::now());
        let dist = &insights.research_trends.career_stage_distribution;
        assert_eq!(dist.get("early_career"), Some(&2));
        assert_eq!(dist.get("unknown"), Some(&1));
        assert_eq!(insights.insights.dominant_career_stage, "early_career");
    }

    #[test]
    fn methodology_tally_keeps_original_casing() {
        let ideas = vec![
            idea_with_methods(&["computational", "experimental"]),
            idea_with_methods(&["computational"]),
        ];
        let insights = research_insights(&[], &ideas, Utc::now());
        let top = &insights.research_trends.top_methodologies;
        assert_eq!(top[0], ("computational".to_owned(), 2));
        assert_eq!(insights.insights.most_common_methodology, "computational");
    }

    #[test]
    fn idea_quality_averages_exclude_unscored() {
        let ideas = vec![
            IdeaRecord {
                innovation_level: Some(0.78),
                feasibility_score: Some(0.85),
                impact_potential: Some(0.90),
                ..Default::default()
            },
            IdeaRecord {
                innovation_level: Some(0.0),
                feasibility_score: None,
                impact_potential: Some(0.80),
                ..Default::default()
            },
        ];
        let insights = research_insights(&[], &ideas, Utc::now());
        let quality = &insights.idea_quality_metrics;
        assert!((quality.avg_innovation_level - 0.78).abs() < 1e-9);
        assert!((quality.avg_feasibility_score - 0.85).abs() < 1e-9);
        assert!((quality.avg_impact_potential - 0.85).abs() < 1e-9);
        assert_eq!(quality.total_ideas, 2);
    }

    #[test]
    fn empty_collections_yield_unknown_headlines() {
        let insights = research_insights(&[], &[], Utc::now());
        assert_eq!(insights.insights.most_active_research_area, "unknown");
        assert_eq!(insights.insights.most_common_methodology, "unknown");
        assert_eq!(insights.insights.dominant_career_stage, "unknown");
        assert!(insights.research_trends.top_research_areas.is_empty());
        assert_eq!(insights.idea_quality_metrics.avg_innovation_level, 0.0);
    }
}

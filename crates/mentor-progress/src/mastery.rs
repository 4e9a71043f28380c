//! Per-concept mastery from the `concept.<id>` quality series.
//!
//! Every submission that used a concept adds its quality score to that concept's
//! series, so a concept's attempts are the submissions that exercised it.

use std::collections::BTreeMap;

use mentor_core::constants::{
    CONCEPT_TREND_DELTA, CONCEPT_TREND_RECENT, LEARNING_SCORE, MASTERED_ATTEMPTS,
    MASTERED_SCORE, PROFICIENT_ATTEMPTS, PROFICIENT_SCORE,
};
use mentor_core::types::ConceptSet;
use mentor_core::ConceptId;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::sample::{concept_of, ProgressMetricSample};

/// Ordered `struggling < learning < proficient < mastered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    Struggling,
    Learning,
    Proficient,
    Mastered,
}

impl MasteryLevel {
    pub fn classify(average_score: f64, attempts: usize) -> Self {
        if average_score >= MASTERED_SCORE && attempts >= MASTERED_ATTEMPTS {
            Self::Mastered
        } else if average_score >= PROFICIENT_SCORE && attempts >= PROFICIENT_ATTEMPTS {
            Self::Proficient
        } else if average_score >= LEARNING_SCORE {
            Self::Learning
        } else {
            Self::Struggling
        }
    }

    /// Contribution to the overall mastery score.
    pub fn weight(self) -> f64 {
        match self {
            Self::Mastered => 1.0,
            Self::Proficient => 0.7,
            Self::Learning => 0.4,
            Self::Struggling => 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptTrend {
    Improving,
    Stable,
    Declining,
    /// Every attempt falls in the recent window; nothing to compare against.
    NewConcept,
    InsufficientData,
}

/// Mean of the last three attempts against the mean of all earlier ones.
pub fn concept_trend(scores: &[f64]) -> ConceptTrend {
    if scores.len() < 2 {
        return ConceptTrend::InsufficientData;
    }
    if scores.len() <= CONCEPT_TREND_RECENT {
        return ConceptTrend::NewConcept;
    }
    let (older, recent) = scores.split_at(scores.len() - CONCEPT_TREND_RECENT);
    let change = recent.iter().mean() - older.iter().mean();
    if change > CONCEPT_TREND_DELTA {
        ConceptTrend::Improving
    } else if change < -CONCEPT_TREND_DELTA {
        ConceptTrend::Declining
    } else {
        ConceptTrend::Stable
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptMastery {
    pub concept: ConceptId,
    pub level: MasteryLevel,
    /// Mean quality score, rounded to two decimals.
    pub average_score: f64,
    pub attempts: usize,
    pub trend: ConceptTrend,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterySummary {
    /// One entry per concept, ordered by id.
    pub concepts: Vec<ConceptMastery>,
    pub mastered_concepts: ConceptSet,
    pub struggling_concepts: ConceptSet,
    /// Mean level weight times 100, two decimals; 0 with no concepts.
    pub overall_mastery: f64,
}

impl MasterySummary {
    pub fn get(&self, concept: &str) -> Option<&ConceptMastery> {
        self.concepts.iter().find(|c| c.concept.as_str() == concept)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mastery over a learner's samples. Samples of other metrics are ignored.
pub fn concept_mastery(learner_samples: &[ProgressMetricSample]) -> MasterySummary {
    let mut scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for sample in learner_samples {
        if let Some(concept) = concept_of(sample.metric_name()) {
            scores.entry(concept).or_default().push(sample.value());
        }
    }

    let concepts: Vec<ConceptMastery> = scores
        .into_iter()
        .map(|(concept, values)| {
            let average = values.iter().mean();
            ConceptMastery {
                concept: ConceptId::from(concept),
                level: MasteryLevel::classify(average, values.len()),
                average_score: round2(average),
                attempts: values.len(),
                trend: concept_trend(&values),
            }
        })
        .collect();

    let with_level = |level: MasteryLevel| -> ConceptSet {
        concepts
            .iter()
            .filter(|c| c.level == level)
            .map(|c| c.concept.clone())
            .collect()
    };
    let overall_mastery = if concepts.is_empty() {
        0.0
    } else {
        round2(concepts.iter().map(|c| c.level.weight()).mean() * 100.0)
    };

    MasterySummary {
        mastered_concepts: with_level(MasteryLevel::Mastered),
        struggling_concepts: with_level(MasteryLevel::Struggling),
        overall_mastery,
        concepts,
    }
}

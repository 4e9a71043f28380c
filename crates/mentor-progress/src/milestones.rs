//! Submission-count and quality-score milestones.
//!
//! Replaying a submission series chronologically fires each milestone at most once: count
//! milestones at the n-th submission, quality milestones at the first submission whose
//! score meets the threshold.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use mentor_core::constants::{QUALITY_SCORE_MILESTONES, SUBMISSION_COUNT_MILESTONES};
use serde::{Deserialize, Serialize};

use crate::sample::ProgressMetricSample;

/// Identity of a milestone: its table and threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum MilestoneKey {
    SubmissionCount(u32),
    QualityScore(u32),
}

impl MilestoneKey {
    pub fn id(self) -> String {
        match self {
            MilestoneKey::SubmissionCount(n) => format!("{n}_submissions"),
            MilestoneKey::QualityScore(60) => "first_good_score".to_string(),
            MilestoneKey::QualityScore(80) => "first_great_score".to_string(),
            MilestoneKey::QualityScore(90) => "excellence".to_string(),
            MilestoneKey::QualityScore(t) => format!("quality_{t}"),
        }
    }

    pub fn description(self) -> String {
        match self {
            MilestoneKey::SubmissionCount(n) => format!("Completed {n} coding problems"),
            MilestoneKey::QualityScore(90) => {
                "Achieved excellence with score above 90".to_string()
            }
            MilestoneKey::QualityScore(t) => format!("Achieved first quality score above {t}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub key: MilestoneKey,
    pub id: String,
    pub description: String,
    pub achieved_at: DateTime<Utc>,
    /// Triggering score for quality milestones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Milestone {
    fn new(key: MilestoneKey, achieved_at: DateTime<Utc>, score: Option<f64>) -> Self {
        Self {
            key,
            id: key.id(),
            description: key.description(),
            achieved_at,
            score,
        }
    }
}

/// All milestones reached by `submissions` (one quality sample per submission, oldest
/// first). Count milestones come first, then quality milestones, each in table order.
pub fn milestones(submissions: &[ProgressMetricSample]) -> Vec<Milestone> {
    let mut out = Vec::new();

    for count in SUBMISSION_COUNT_MILESTONES {
        if let Some(sample) = submissions.get(count as usize - 1) {
            out.push(Milestone::new(
                MilestoneKey::SubmissionCount(count),
                sample.recorded_at(),
                None,
            ));
        }
    }

    for threshold in QUALITY_SCORE_MILESTONES {
        if let Some(sample) = submissions
            .iter()
            .find(|s| s.value() >= f64::from(threshold))
        {
            out.push(Milestone::new(
                MilestoneKey::QualityScore(threshold),
                sample.recorded_at(),
                Some(sample.value()),
            ));
        }
    }

    out
}

/// Milestones reached by `submissions` that are not in `already_achieved`.
pub fn new_milestones(
    submissions: &[ProgressMetricSample],
    already_achieved: &BTreeSet<MilestoneKey>,
) -> Vec<Milestone> {
    milestones(submissions)
        .into_iter()
        .filter(|m| !already_achieved.contains(&m.key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::MetricKind;
    use chrono::Duration;

    fn series(scores: &[f64]) -> Vec<ProgressMetricSample> {
        let t0 = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        scores
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                ProgressMetricSample::new(
                    "l",
                    "code_quality",
                    v,
                    MetricKind::Score,
                    t0 + Duration::days(i as i64),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn ids_and_descriptions() {
        assert_eq!(MilestoneKey::SubmissionCount(25).id(), "25_submissions");
        assert_eq!(MilestoneKey::QualityScore(80).id(), "first_great_score");
        assert_eq!(
            MilestoneKey::QualityScore(60).description(),
            "Achieved first quality score above 60"
        );
    }

    #[test]
    fn count_milestone_fires_at_nth_submission() {
        let samples = series(&[10.0; 12]);
        let found = milestones(&samples);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, MilestoneKey::SubmissionCount(10));
        assert_eq!(found[0].achieved_at, samples[9].recorded_at());
    }

    #[test]
    fn quality_milestone_fires_at_first_reach() {
        let samples = series(&[50.0, 85.0, 61.0, 95.0]);
        let found = milestones(&samples);
        let keys: Vec<MilestoneKey> = found.iter().map(|m| m.key).collect();
        assert_eq!(
            keys,
            vec![
                MilestoneKey::QualityScore(60),
                MilestoneKey::QualityScore(80),
                MilestoneKey::QualityScore(90),
            ]
        );
        assert_eq!(found[0].achieved_at, samples[1].recorded_at());
        assert_eq!(found[0].score, Some(85.0));
        assert_eq!(found[2].achieved_at, samples[3].recorded_at());
    }

    #[test]
    fn recorded_milestones_do_not_refire() {
        let samples = series(&[70.0, 75.0]);
        let first = new_milestones(&samples[..1], &BTreeSet::new());
        let recorded: BTreeSet<MilestoneKey> = first.iter().map(|m| m.key).collect();
        assert!(new_milestones(&samples, &recorded).is_empty());
    }
}

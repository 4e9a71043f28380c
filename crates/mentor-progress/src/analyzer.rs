//! Progress Trend Analytics.
//!
//! Every operation is a pure function of the samples it is given. The analyzer holds only
//! thresholds; history lives in a [`MetricHistoryStore`] owned by the caller.

use mentor_core::config::ProgressConfig;
use mentor_core::constants::{METRIC_CODE_QUALITY, METRIC_COMPLEXITY_HANDLING};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::advice::progress_advice;
use crate::consistency::consistency_score;
use crate::mastery::{concept_mastery, MasterySummary};
use crate::milestones::{milestones, Milestone};
use crate::sample::{values, ProgressMetricSample};
use crate::sessions::{session_frequency, SessionFrequency};
use crate::store::MetricHistoryStore;
use crate::trajectory::{classify_trajectory, Trajectory};
use crate::trend::{analyze_trend, TrendSummary};
use crate::velocity::{analyze_velocity, VelocitySummary, VelocityThresholds};

/// Everything known about one learner's progress at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub learner_id: String,
    pub submission_count: usize,
    pub quality_trend: TrendSummary,
    pub complexity_trend: TrendSummary,
    pub velocity: VelocitySummary,
    pub consistency: f64,
    pub session_frequency: SessionFrequency,
    pub trajectory: Trajectory,
    pub milestones: Vec<Milestone>,
    pub mastery: MasterySummary,
    pub advice: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProgressAnalyzer {
    trend_slope_threshold: f64,
    current_average_window: usize,
    min_trend_samples: usize,
    min_velocity_samples: usize,
    velocity: VelocityThresholds,
}

impl Default for ProgressAnalyzer {
    fn default() -> Self {
        Self::new(&ProgressConfig::default())
    }
}

impl ProgressAnalyzer {
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            trend_slope_threshold: config.effective_trend_slope_threshold(),
            current_average_window: config.effective_current_average_window(),
            min_trend_samples: config.effective_min_trend_samples(),
            min_velocity_samples: config.effective_min_velocity_samples(),
            velocity: VelocityThresholds {
                fast: config.effective_velocity_fast(),
                moderate: config.effective_velocity_moderate(),
                slow: config.effective_velocity_slow(),
            },
        }
    }

    /// Trend of one metric series, oldest first.
    pub fn trend(&self, samples: &[ProgressMetricSample]) -> TrendSummary {
        self.trend_of(&values(samples))
    }

    pub fn trend_of(&self, values: &[f64]) -> TrendSummary {
        analyze_trend(
            values,
            self.trend_slope_threshold,
            self.current_average_window,
            self.min_trend_samples,
        )
    }

    /// Velocity of a raw score series, oldest first.
    pub fn velocity(&self, samples: &[ProgressMetricSample]) -> VelocitySummary {
        self.velocity_of(&values(samples))
    }

    pub fn velocity_of(&self, values: &[f64]) -> VelocitySummary {
        analyze_velocity(values, self.min_velocity_samples, &self.velocity)
    }

    pub fn consistency(&self, samples: &[ProgressMetricSample]) -> f64 {
        consistency_score(&values(samples))
    }

    /// Assemble a report from a store snapshot.
    #[instrument(skip(self, store))]
    pub fn report(&self, store: &dyn MetricHistoryStore, learner_id: &str) -> ProgressReport {
        let quality = store.history(learner_id, METRIC_CODE_QUALITY);
        let complexity = store.history(learner_id, METRIC_COMPLEXITY_HANDLING);
        let everything = store.learner_history(learner_id);

        let quality_values = values(&quality);
        let quality_trend = self.trend_of(&quality_values);
        let complexity_trend = self.trend(&complexity);
        let trajectory = classify_trajectory(&quality_trend, &complexity_trend);

        let report = ProgressReport {
            learner_id: learner_id.to_string(),
            submission_count: quality.len(),
            velocity: self.velocity_of(&quality_values),
            consistency: consistency_score(&quality_values),
            session_frequency: session_frequency(&everything),
            milestones: milestones(&quality),
            mastery: concept_mastery(&everything),
            advice: progress_advice(&quality),
            quality_trend,
            complexity_trend,
            trajectory,
        };
        debug!(
            submissions = report.submission_count,
            trajectory = ?report.trajectory,
            milestones = report.milestones.len(),
            overall_mastery = report.mastery.overall_mastery,
            "progress report assembled"
        );
        report
    }
}

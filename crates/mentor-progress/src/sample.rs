//! Metric samples and their boundary validation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use mentor_analysis::CodeAnalysisResult;
use mentor_core::constants::{
    METRIC_CODE_QUALITY, METRIC_COMPLEXITY_HANDLING, METRIC_CONCEPT_PREFIX,
    METRIC_LEARNING_SESSION,
};
use mentor_core::errors::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Score,
    Count,
    Level,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Score => "score",
            MetricKind::Count => "count",
            MetricKind::Level => "level",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(MetricKind::Score),
            "count" => Ok(MetricKind::Count),
            "level" => Ok(MetricKind::Level),
            _ => Err(ValidationError::UnknownMetricKind(s.to_string())),
        }
    }
}

/// One scalar observation. Only constructible through validation, so every sample in
/// memory has a non-empty learner and metric, a finite value, and no negative counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSample")]
pub struct ProgressMetricSample {
    learner_id: String,
    metric_name: String,
    value: f64,
    metric_kind: MetricKind,
    recorded_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawSample {
    learner_id: String,
    metric_name: String,
    value: f64,
    metric_kind: MetricKind,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<RawSample> for ProgressMetricSample {
    type Error = ValidationError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Self::new(
            raw.learner_id,
            raw.metric_name,
            raw.value,
            raw.metric_kind,
            raw.recorded_at,
        )
    }
}

impl ProgressMetricSample {
    pub fn new(
        learner_id: impl Into<String>,
        metric_name: impl Into<String>,
        value: f64,
        metric_kind: MetricKind,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let learner_id = learner_id.into();
        let metric_name = metric_name.into();
        if learner_id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "learner_id" });
        }
        if metric_name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "metric_name" });
        }
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                metric: metric_name,
                value,
            });
        }
        if metric_kind == MetricKind::Count && value < 0.0 {
            return Err(ValidationError::NegativeCount {
                metric: metric_name,
                value,
            });
        }
        Ok(Self {
            learner_id,
            metric_name,
            value,
            metric_kind,
            recorded_at,
        })
    }

    pub fn learner_id(&self) -> &str {
        &self.learner_id
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn metric_kind(&self) -> MetricKind {
        self.metric_kind
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Metric name carrying the quality scores of submissions that used `concept`.
pub fn concept_metric(concept: &str) -> String {
    format!("{METRIC_CONCEPT_PREFIX}{concept}")
}

/// Concept id of a per-concept metric name.
pub fn concept_of(metric_name: &str) -> Option<&str> {
    metric_name
        .strip_prefix(METRIC_CONCEPT_PREFIX)
        .filter(|concept| !concept.is_empty())
}

/// The samples recorded for one analyzed submission: quality score, complexity score,
/// one learning session, then the quality score again under each detected concept.
pub fn samples_from_analysis(
    learner_id: &str,
    analysis: &CodeAnalysisResult,
    recorded_at: DateTime<Utc>,
) -> Result<Vec<ProgressMetricSample>, ValidationError> {
    let mut samples = vec![
        ProgressMetricSample::new(
            learner_id,
            METRIC_CODE_QUALITY,
            analysis.quality_score,
            MetricKind::Score,
            recorded_at,
        )?,
        ProgressMetricSample::new(
            learner_id,
            METRIC_COMPLEXITY_HANDLING,
            analysis.complexity_score,
            MetricKind::Score,
            recorded_at,
        )?,
        ProgressMetricSample::new(
            learner_id,
            METRIC_LEARNING_SESSION,
            1.0,
            MetricKind::Count,
            recorded_at,
        )?,
    ];
    for concept in analysis.detected_concepts() {
        samples.push(ProgressMetricSample::new(
            learner_id,
            concept_metric(concept.as_str()),
            analysis.quality_score,
            MetricKind::Score,
            recorded_at,
        )?);
    }
    Ok(samples)
}

/// Values of `samples`, in order.
pub fn values(samples: &[ProgressMetricSample]) -> Vec<f64> {
    samples.iter().map(|s| s.value).collect()
}

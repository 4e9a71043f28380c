//! Session frequency: learning sessions per week over a learner's active span.

use mentor_core::constants::{
    METRIC_LEARNING_SESSION, SESSIONS_PER_WEEK_HIGH, SESSIONS_PER_WEEK_LOW,
    SESSIONS_PER_WEEK_MODERATE,
};
use serde::{Deserialize, Serialize};

use crate::sample::ProgressMetricSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionFrequencyCategory {
    High,
    Moderate,
    Low,
    VeryLow,
}

impl SessionFrequencyCategory {
    pub fn from_rate(sessions_per_week: f64) -> Self {
        if sessions_per_week >= SESSIONS_PER_WEEK_HIGH {
            Self::High
        } else if sessions_per_week >= SESSIONS_PER_WEEK_MODERATE {
            Self::Moderate
        } else if sessions_per_week >= SESSIONS_PER_WEEK_LOW {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionFrequency {
    InsufficientData,
    /// Less than one week between the first and last sample.
    InsufficientTimespan { weeks_active: f64 },
    Measured {
        sessions_per_week: f64,
        weeks_active: f64,
        category: SessionFrequencyCategory,
    },
}

/// Frequency over all of a learner's samples, oldest first. The span is whole days
/// between the first and last sample of any metric; only `learning_session` samples count.
pub fn session_frequency(learner_samples: &[ProgressMetricSample]) -> SessionFrequency {
    let (Some(first), Some(last)) = (learner_samples.first(), learner_samples.last()) else {
        return SessionFrequency::InsufficientData;
    };
    if learner_samples.len() < 2 {
        return SessionFrequency::InsufficientData;
    }
    let weeks_active = (last.recorded_at() - first.recorded_at()).num_days() as f64 / 7.0;
    if weeks_active < 1.0 {
        return SessionFrequency::InsufficientTimespan { weeks_active };
    }
    let sessions = learner_samples
        .iter()
        .filter(|s| s.metric_name() == METRIC_LEARNING_SESSION)
        .count();
    let sessions_per_week = sessions as f64 / weeks_active;
    SessionFrequency::Measured {
        sessions_per_week,
        weeks_active,
        category: SessionFrequencyCategory::from_rate(sessions_per_week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::MetricKind;
    use chrono::{DateTime, Duration, Utc};

    fn session(day: i64) -> ProgressMetricSample {
        let t0 = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        ProgressMetricSample::new(
            "l",
            METRIC_LEARNING_SESSION,
            1.0,
            MetricKind::Count,
            t0 + Duration::days(day),
        )
        .unwrap()
    }

    #[test]
    fn categories_at_boundaries() {
        assert_eq!(SessionFrequencyCategory::from_rate(5.0), SessionFrequencyCategory::High);
        assert_eq!(SessionFrequencyCategory::from_rate(2.0), SessionFrequencyCategory::Moderate);
        assert_eq!(SessionFrequencyCategory::from_rate(0.5), SessionFrequencyCategory::Low);
        assert_eq!(SessionFrequencyCategory::from_rate(0.49), SessionFrequencyCategory::VeryLow);
    }

    #[test]
    fn short_span_is_reported() {
        let samples = [session(0), session(3)];
        assert!(matches!(
            session_frequency(&samples),
            SessionFrequency::InsufficientTimespan { .. }
        ));
        assert_eq!(session_frequency(&samples[..1]), SessionFrequency::InsufficientData);
    }

    #[test]
    fn fourteen_sessions_over_two_weeks() {
        let samples: Vec<ProgressMetricSample> = (0..14).map(|d| session(d + d / 13)).collect();
        // Days 0..=12 then 14: span 14 days.
        match session_frequency(&samples) {
            SessionFrequency::Measured {
                sessions_per_week,
                weeks_active,
                category,
            } => {
                assert!((weeks_active - 2.0).abs() < 1e-9);
                assert!((sessions_per_week - 7.0).abs() < 1e-9);
                assert_eq!(category, SessionFrequencyCategory::High);
            }
            other => panic!("expected measured, got {other:?}"),
        }
    }
}

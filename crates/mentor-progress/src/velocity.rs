//! Learning velocity from rolling means of a raw score series.

use mentor_core::constants::{ACCELERATION_THRESHOLD, MAX_ROLLING_WINDOW};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityCategory {
    Fast,
    Moderate,
    Slow,
    Declining,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceleration {
    Accelerating,
    Decelerating,
    Steady,
    InsufficientData,
}

/// Velocity thresholds, strictly decreasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityThresholds {
    pub fast: f64,
    pub moderate: f64,
    pub slow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocitySummary {
    pub category: VelocityCategory,
    /// Score change per rolling mean.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    pub acceleration: Acceleration,
    pub window_size: usize,
    pub sample_count: usize,
}

impl VelocitySummary {
    pub fn insufficient(sample_count: usize) -> Self {
        Self {
            category: VelocityCategory::InsufficientData,
            velocity: None,
            acceleration: Acceleration::InsufficientData,
            window_size: 0,
            sample_count,
        }
    }
}

/// Means of every full window of `window` consecutive values.
pub fn rolling_means(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values.windows(window).map(|w| w.iter().mean()).collect()
}

pub fn classify_velocity(velocity: f64, thresholds: &VelocityThresholds) -> VelocityCategory {
    if velocity > thresholds.fast {
        VelocityCategory::Fast
    } else if velocity > thresholds.moderate {
        VelocityCategory::Moderate
    } else if velocity > thresholds.slow {
        VelocityCategory::Slow
    } else {
        VelocityCategory::Declining
    }
}

/// Mean second difference of `series`, classified against ±0.5.
pub fn acceleration(series: &[f64]) -> Acceleration {
    if series.len() < 3 {
        return Acceleration::InsufficientData;
    }
    let first: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let second: Vec<f64> = first.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = second.iter().mean();
    if mean > ACCELERATION_THRESHOLD {
        Acceleration::Accelerating
    } else if mean < -ACCELERATION_THRESHOLD {
        Acceleration::Decelerating
    } else {
        Acceleration::Steady
    }
}

/// Velocity over `values` with window `min(5, n / 2)`.
///
/// velocity = (last rolling mean - first rolling mean) / number of rolling means.
pub fn analyze_velocity(
    values: &[f64],
    min_samples: usize,
    thresholds: &VelocityThresholds,
) -> VelocitySummary {
    let n = values.len();
    if n < min_samples.max(2) {
        return VelocitySummary::insufficient(n);
    }
    let window = MAX_ROLLING_WINDOW.min(n / 2).max(1);
    let means = rolling_means(values, window);
    let (Some(first), Some(last)) = (means.first(), means.last()) else {
        return VelocitySummary::insufficient(n);
    };
    if means.len() < 2 {
        return VelocitySummary::insufficient(n);
    }
    let velocity = (last - first) / means.len() as f64;
    VelocitySummary {
        category: classify_velocity(velocity, thresholds),
        velocity: Some(velocity),
        acceleration: acceleration(&means),
        window_size: window,
        sample_count: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::constants::{VELOCITY_FAST, VELOCITY_MODERATE, VELOCITY_SLOW};

    const DEFAULTS: VelocityThresholds = VelocityThresholds {
        fast: VELOCITY_FAST,
        moderate: VELOCITY_MODERATE,
        slow: VELOCITY_SLOW,
    };

    #[test]
    fn needs_five_samples() {
        let summary = analyze_velocity(&[1.0, 2.0, 3.0, 4.0], 5, &DEFAULTS);
        assert_eq!(summary.category, VelocityCategory::InsufficientData);
        assert_eq!(summary.velocity, None);
    }

    #[test]
    fn linear_growth() {
        // n = 6, window 3, rolling means 20, 30, 40, 50.
        let values = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        let summary = analyze_velocity(&values, 5, &DEFAULTS);
        assert_eq!(summary.window_size, 3);
        assert!((summary.velocity.unwrap() - 7.5).abs() < 1e-9);
        assert_eq!(summary.category, VelocityCategory::Fast);
        assert_eq!(summary.acceleration, Acceleration::Steady);
    }

    #[test]
    fn flat_scores_are_slow() {
        let summary = analyze_velocity(&[50.0; 8], 5, &DEFAULTS);
        assert_eq!(summary.category, VelocityCategory::Slow);
    }

    #[test]
    fn falling_scores_are_declining() {
        let values = [90.0, 80.0, 70.0, 60.0, 50.0];
        assert_eq!(
            analyze_velocity(&values, 5, &DEFAULTS).category,
            VelocityCategory::Declining
        );
    }

    #[test]
    fn acceleration_from_second_differences() {
        assert_eq!(acceleration(&[1.0, 2.0, 4.0, 8.0]), Acceleration::Accelerating);
        assert_eq!(acceleration(&[8.0, 4.0, 2.0, 1.0]), Acceleration::Accelerating);
        assert_eq!(acceleration(&[0.0, 4.0, 6.0, 7.0]), Acceleration::Decelerating);
        assert_eq!(acceleration(&[1.0, 2.0]), Acceleration::InsufficientData);
    }
}

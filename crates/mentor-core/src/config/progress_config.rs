//! Progress analytics configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds for trend and velocity classification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    /// Slope magnitude at or below which a trend is stable. Default: 0.1.
    pub trend_slope_threshold: Option<f64>,
    /// Trailing samples averaged for the current average. Default: 5.
    pub current_average_window: Option<usize>,
    /// Minimum samples for a trend fit. Default: 2.
    pub min_trend_samples: Option<usize>,
    /// Minimum raw samples for a velocity estimate. Default: 5.
    pub min_velocity_samples: Option<usize>,
    /// Velocity above this is fast. Default: 2.0.
    pub velocity_fast: Option<f64>,
    /// Velocity above this is moderate. Default: 0.5.
    pub velocity_moderate: Option<f64>,
    /// Velocity above this is slow. Default: -0.5.
    pub velocity_slow: Option<f64>,
}

impl ProgressConfig {
    pub fn effective_trend_slope_threshold(&self) -> f64 {
        self.trend_slope_threshold
            .unwrap_or(constants::TREND_SLOPE_THRESHOLD)
    }

    pub fn effective_current_average_window(&self) -> usize {
        self.current_average_window
            .unwrap_or(constants::CURRENT_AVERAGE_WINDOW)
    }

    pub fn effective_min_trend_samples(&self) -> usize {
        self.min_trend_samples.unwrap_or(constants::MIN_TREND_SAMPLES)
    }

    pub fn effective_min_velocity_samples(&self) -> usize {
        self.min_velocity_samples
            .unwrap_or(constants::MIN_VELOCITY_SAMPLES)
    }

    pub fn effective_velocity_fast(&self) -> f64 {
        self.velocity_fast.unwrap_or(constants::VELOCITY_FAST)
    }

    pub fn effective_velocity_moderate(&self) -> f64 {
        self.velocity_moderate.unwrap_or(constants::VELOCITY_MODERATE)
    }

    pub fn effective_velocity_slow(&self) -> f64 {
        self.velocity_slow.unwrap_or(constants::VELOCITY_SLOW)
    }

    pub(crate) fn merge(&mut self, other: &ProgressConfig) {
        if other.trend_slope_threshold.is_some() {
            self.trend_slope_threshold = other.trend_slope_threshold;
        }
        if other.current_average_window.is_some() {
            self.current_average_window = other.current_average_window;
        }
        if other.min_trend_samples.is_some() {
            self.min_trend_samples = other.min_trend_samples;
        }
        if other.min_velocity_samples.is_some() {
            self.min_velocity_samples = other.min_velocity_samples;
        }
        if other.velocity_fast.is_some() {
            self.velocity_fast = other.velocity_fast;
        }
        if other.velocity_moderate.is_some() {
            self.velocity_moderate = other.velocity_moderate;
        }
        if other.velocity_slow.is_some() {
            self.velocity_slow = other.velocity_slow;
        }
    }
}

//! Least-squares trend over a metric series.
//!
//! The line is fit to `(index, value)` pairs, so spacing in time does not matter. The
//! classified slope is relative: the fitted change per sample divided by the series
//! mean (floored at 1), which makes one threshold meaningful for scores and counts alike.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
    InsufficientData,
}

/// Trend for one metric. Numeric fields are absent when data is insufficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub trend: TrendDirection,
    /// Relative change per sample; the value classified against the threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    /// Fitted change per sample in the metric's own units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_slope: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_average: Option<f64>,
    pub sample_count: usize,
}

impl TrendSummary {
    pub fn insufficient(sample_count: usize) -> Self {
        Self {
            trend: TrendDirection::InsufficientData,
            slope: None,
            raw_slope: None,
            current_average: None,
            sample_count,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.trend == TrendDirection::InsufficientData
    }
}

/// OLS slope of `values` against their index. `None` below two samples.
pub fn ols_slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
    let slope = xs.iter().covariance(values.iter()) / xs.iter().variance();
    slope.is_finite().then_some(slope)
}

/// Mean of the last `window` values, or of all values when there are fewer.
pub fn current_average(values: &[f64], window: usize) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let start = values.len().saturating_sub(window.max(1));
    Some(values[start..].iter().mean())
}

pub fn classify_slope(slope: f64, threshold: f64) -> TrendDirection {
    if slope > threshold {
        TrendDirection::Improving
    } else if slope < -threshold {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Fit and classify. `min_samples` is at least two.
pub fn analyze_trend(
    values: &[f64],
    threshold: f64,
    average_window: usize,
    min_samples: usize,
) -> TrendSummary {
    let n = values.len();
    if n < min_samples.max(2) {
        return TrendSummary::insufficient(n);
    }
    let Some(raw_slope) = ols_slope(values) else {
        return TrendSummary::insufficient(n);
    };
    let level = values.iter().mean().abs().max(1.0);
    let slope = raw_slope / level;
    TrendSummary {
        trend: classify_slope(slope, threshold),
        slope: Some(slope),
        raw_slope: Some(raw_slope),
        current_average: current_average(values, average_window),
        sample_count: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn slope_of_a_line() {
        assert!(close(ols_slope(&[1.0, 3.0, 5.0, 7.0]).unwrap(), 2.0));
        assert!(close(ols_slope(&[40.0, 42.0, 41.0]).unwrap(), 0.5));
        assert_eq!(ols_slope(&[1.0]), None);
    }

    #[test]
    fn current_average_uses_trailing_window() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        assert!(close(current_average(&values, 5).unwrap(), 40.0));
        assert!(close(current_average(&values[..3], 5).unwrap(), 20.0));
        assert_eq!(current_average(&[], 5), None);
    }

    #[test]
    fn relative_slope_classification() {
        let summary = analyze_trend(&[40.0, 55.0, 70.0], 0.1, 5, 2);
        assert_eq!(summary.trend, TrendDirection::Improving);
        assert!(close(summary.raw_slope.unwrap(), 15.0));
        assert!(close(summary.slope.unwrap(), 15.0 / 55.0));

        let declining = analyze_trend(&[70.0, 55.0, 40.0], 0.1, 5, 2);
        assert_eq!(declining.trend, TrendDirection::Declining);
    }

    #[test]
    fn near_zero_series_uses_unit_level() {
        // Mean 0.5 is floored at 1, so the relative slope equals the raw slope.
        let summary = analyze_trend(&[0.0, 1.0], 0.1, 5, 2);
        assert!(close(summary.slope.unwrap(), 1.0));
    }
}

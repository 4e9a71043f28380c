//! Consistency score.

use mentor_core::constants::{MAX_SCORE, MIN_CONSISTENCY_SAMPLES};
use statrs::statistics::Statistics;

/// `max(0, 100 - popstd / max(mean, 1) * 100)`; 0 below two samples.
pub fn consistency_score(values: &[f64]) -> f64 {
    if values.len() < MIN_CONSISTENCY_SAMPLES {
        return 0.0;
    }
    let mean = values.iter().mean();
    let std_dev = values.iter().population_std_dev();
    let score = MAX_SCORE - (std_dev / mean.max(1.0)) * MAX_SCORE;
    if score.is_finite() {
        score.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    }
}

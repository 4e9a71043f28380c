//! Overall trajectory from the quality and complexity trends.

use serde::{Deserialize, Serialize};

use crate::trend::{TrendDirection, TrendSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    ExcellentProgress,
    GoodProgress,
    SteadyState,
    NeedsAttention,
    InsufficientData,
}

/// Both improving is excellent, either improving is good, both stable is steady.
/// Anything else needs attention, unless neither trend has enough data.
pub fn classify_trajectory(quality: &TrendSummary, complexity: &TrendSummary) -> Trajectory {
    use TrendDirection::*;
    match (quality.trend, complexity.trend) {
        (InsufficientData, InsufficientData) => Trajectory::InsufficientData,
        (Improving, Improving) => Trajectory::ExcellentProgress,
        (Improving, _) | (_, Improving) => Trajectory::GoodProgress,
        (Stable, Stable) => Trajectory::SteadyState,
        _ => Trajectory::NeedsAttention,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(trend: TrendDirection) -> TrendSummary {
        TrendSummary {
            trend,
            slope: None,
            raw_slope: None,
            current_average: None,
            sample_count: 3,
        }
    }

    #[test]
    fn trajectory_table() {
        use TrendDirection::*;
        let cases = [
            (Improving, Improving, Trajectory::ExcellentProgress),
            (Improving, Declining, Trajectory::GoodProgress),
            (InsufficientData, Improving, Trajectory::GoodProgress),
            (Stable, Stable, Trajectory::SteadyState),
            (Stable, Declining, Trajectory::NeedsAttention),
            (Stable, InsufficientData, Trajectory::NeedsAttention),
            (InsufficientData, InsufficientData, Trajectory::InsufficientData),
        ];
        for (q, c, expected) in cases {
            assert_eq!(classify_trajectory(&summary(q), &summary(c)), expected, "{q:?}/{c:?}");
        }
    }
}

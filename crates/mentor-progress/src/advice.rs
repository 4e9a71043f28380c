//! Plain-language practice advice from the quality series.

use mentor_core::constants::{
    ADVICE_FUNDAMENTALS_BELOW, ADVICE_MIN_DAILY_RATE, ADVICE_MIN_SUBMISSIONS,
    ADVICE_OPTIMIZE_BELOW, ADVICE_RECENT_WINDOW,
};
use statrs::statistics::Statistics;

use crate::sample::ProgressMetricSample;

pub const KEEP_PRACTICING: &str =
    "Keep practicing! Try to solve at least 5 more problems to get better insights.";
pub const REVIEW_FUNDAMENTALS: &str =
    "Focus on understanding problem fundamentals before optimizing.";
pub const REVIEW_BASICS: &str = "Consider reviewing basic data structures and algorithms.";
pub const OPTIMIZE_SOLUTIONS: &str =
    "Good progress! Try to optimize your solutions for better time complexity.";
pub const HARDER_PROBLEMS: &str = "Practice more challenging problems to improve further.";
pub const EXPLORE_ADVANCED: &str =
    "Excellent work! Consider exploring advanced algorithms and design patterns.";
pub const SYSTEM_DESIGN: &str = "You might be ready for system design problems.";
pub const PRACTICE_REGULARLY: &str = "Try to maintain a more consistent practice schedule.";

/// Advice from the quality-score samples, oldest first.
///
/// Below the submission minimum only [`KEEP_PRACTICING`] is returned. Otherwise two lines
/// keyed on the recent average, plus [`PRACTICE_REGULARLY`] when submissions per active
/// day fall under the minimum rate.
pub fn progress_advice(quality: &[ProgressMetricSample]) -> Vec<String> {
    if quality.len() < ADVICE_MIN_SUBMISSIONS {
        return vec![KEEP_PRACTICING.to_string()];
    }

    let recent = &quality[quality.len().saturating_sub(ADVICE_RECENT_WINDOW)..];
    let recent_average = recent.iter().map(ProgressMetricSample::value).mean();
    let pair = if recent_average < ADVICE_FUNDAMENTALS_BELOW {
        [REVIEW_FUNDAMENTALS, REVIEW_BASICS]
    } else if recent_average < ADVICE_OPTIMIZE_BELOW {
        [OPTIMIZE_SOLUTIONS, HARDER_PROBLEMS]
    } else {
        [EXPLORE_ADVANCED, SYSTEM_DESIGN]
    };
    let mut advice: Vec<String> = pair.iter().map(|s| s.to_string()).collect();

    let (first, last) = match (quality.first(), quality.last()) {
        (Some(first), Some(last)) => (first.recorded_at(), last.recorded_at()),
        _ => return advice,
    };
    let days = (last - first).num_days().max(1) as f64;
    if (quality.len() as f64) / days < ADVICE_MIN_DAILY_RATE {
        advice.push(PRACTICE_REGULARLY.to_string());
    }
    advice
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::*;
    use crate::sample::MetricKind;

    fn series(scores: &[f64], spacing_days: i64) -> Vec<ProgressMetricSample> {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                ProgressMetricSample::new(
                    "l",
                    "code_quality",
                    score,
                    MetricKind::Score,
                    start + Duration::days(i as i64 * spacing_days),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn few_submissions_only_encourage() {
        assert_eq!(progress_advice(&series(&[90.0; 4], 1)), vec![KEEP_PRACTICING]);
    }

    #[test]
    fn recent_average_picks_the_band() {
        assert_eq!(
            progress_advice(&series(&[90.0, 90.0, 40.0, 40.0, 40.0, 40.0, 40.0], 1)),
            vec![REVIEW_FUNDAMENTALS, REVIEW_BASICS]
        );
        assert_eq!(
            progress_advice(&series(&[60.0; 5], 1)),
            vec![OPTIMIZE_SOLUTIONS, HARDER_PROBLEMS]
        );
        assert_eq!(
            progress_advice(&series(&[70.0; 5], 1)),
            vec![EXPLORE_ADVANCED, SYSTEM_DESIGN]
        );
    }

    #[test]
    fn sparse_practice_adds_schedule_advice() {
        // Five submissions over 40 days is 0.125 per day.
        let advice = progress_advice(&series(&[85.0; 5], 10));
        assert_eq!(advice.last().map(String::as_str), Some(PRACTICE_REGULARLY));
        assert_eq!(advice.len(), 3);
    }
}

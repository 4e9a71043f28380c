//! Complexity and quality scores. Both are pure functions of the other result fields.

use mentor_core::constants::{
    COMPLEXITY_ISSUE_PENALTY, CYCLOMATIC_PENALTY_CAP, CYCLOMATIC_PENALTY_FLOOR,
    CYCLOMATIC_PENALTY_PER_POINT, MAX_SCORE, QUALITY_ALGORITHM_BONUS, QUALITY_ISSUE_PENALTY,
    QUALITY_PATTERN_BONUS, UNKNOWN_COMPLEXITY_PENALTY,
};
use mentor_core::ComplexityClass;

/// Penalty table for the time complexity class. `O(n^k)` has no entry.
pub fn time_penalty(class: ComplexityClass) -> f64 {
    match class {
        ComplexityClass::O1 | ComplexityClass::OLogN => 0.0,
        ComplexityClass::ON => 5.0,
        ComplexityClass::ONLogN => 15.0,
        ComplexityClass::ON2 => 30.0,
        ComplexityClass::O2N => 50.0,
        ComplexityClass::ONk(_) => UNKNOWN_COMPLEXITY_PENALTY,
    }
}

pub fn cyclomatic_penalty(cyclomatic: u32) -> f64 {
    let excess = cyclomatic.saturating_sub(CYCLOMATIC_PENALTY_FLOOR);
    (f64::from(excess) * CYCLOMATIC_PENALTY_PER_POINT).min(CYCLOMATIC_PENALTY_CAP)
}

pub fn complexity_score(time: ComplexityClass, cyclomatic: u32, issue_count: usize) -> f64 {
    let score = MAX_SCORE
        - time_penalty(time)
        - cyclomatic_penalty(cyclomatic)
        - COMPLEXITY_ISSUE_PENALTY * issue_count as f64;
    score.clamp(0.0, MAX_SCORE)
}

pub fn quality_score(issue_count: usize, pattern_count: usize, algorithm_count: usize) -> f64 {
    let score = MAX_SCORE - QUALITY_ISSUE_PENALTY * issue_count as f64
        + QUALITY_PATTERN_BONUS * pattern_count as f64
        + QUALITY_ALGORITHM_BONUS * algorithm_count as f64;
    score.clamp(0.0, MAX_SCORE)
}

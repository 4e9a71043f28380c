//! Shared constants for the mentor engines.
//!
//! Every threshold used by scoring, gap detection, and trend classification lives here
//! so that config defaults and tests reference one name instead of a literal.

/// Mentor version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Static code analysis ----

/// Functions spanning more source lines than this are flagged as too long.
pub const LONG_FUNCTION_LINES: u32 = 50;

/// Conditional nesting deeper than this is flagged as deep nesting.
pub const MAX_CONDITIONAL_NESTING: u32 = 4;

/// Score ceiling for both complexity and quality scores.
pub const MAX_SCORE: f64 = 100.0;

/// Cyclomatic complexity above this starts to cost complexity score.
pub const CYCLOMATIC_PENALTY_FLOOR: u32 = 10;

/// Complexity-score points lost per cyclomatic point above the floor.
pub const CYCLOMATIC_PENALTY_PER_POINT: f64 = 3.0;

/// Upper bound on the cyclomatic penalty.
pub const CYCLOMATIC_PENALTY_CAP: f64 = 30.0;

/// Complexity-score points lost per diagnostic issue.
pub const COMPLEXITY_ISSUE_PENALTY: f64 = 5.0;

/// Quality-score points lost per diagnostic issue.
pub const QUALITY_ISSUE_PENALTY: f64 = 10.0;

/// Quality-score points gained per distinct coding pattern.
pub const QUALITY_PATTERN_BONUS: f64 = 5.0;

/// Quality-score points gained per distinct algorithm category.
pub const QUALITY_ALGORITHM_BONUS: f64 = 3.0;

/// Penalty for a time complexity class with no entry in the penalty table.
pub const UNKNOWN_COMPLEXITY_PENALTY: f64 = 20.0;

// ---- Recommendations ----

/// Maximum recommendations kept after ranking.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Maximum resources attached to one recommendation.
pub const MAX_RESOURCES_PER_CONCEPT: usize = 2;

/// Maximum practice problems returned per recommendation set.
pub const MAX_PRACTICE_PROBLEMS: usize = 8;

/// Base study time for concepts without a catalog entry.
pub const DEFAULT_BASE_MINUTES: u32 = 120;

/// Default estimate for a single practice problem.
pub const DEFAULT_PROBLEM_MINUTES: u32 = 30;

/// Importance strictly above this (with high severity) yields high priority.
pub const HIGH_PRIORITY_IMPORTANCE: f64 = 0.8;

/// Importance strictly above this yields at least medium priority.
pub const MEDIUM_PRIORITY_IMPORTANCE: f64 = 0.7;

/// Number of recent submissions whose concepts form the history window.
pub const RECENT_HISTORY_WINDOW: usize = 10;

/// Concept emitted for quadratic or exponential submissions.
pub const OPTIMIZATION_CONCEPT: &str = "algorithmic_optimization";

/// Concepts every learner is expected to demonstrate.
pub const FUNDAMENTAL_CONCEPTS: [&str; 4] = ["array", "linked_list", "hash_table", "recursion"];

/// Concepts a learning path checks a learner's history for.
pub const LEARNING_PATH_CONCEPTS: [&str; 5] = [
    "array",
    "linked_list",
    "hash_table",
    "recursion",
    "dynamic_programming",
];

/// A concept used in at least this many submissions counts as a strength.
pub const STRENGTH_MIN_SUBMISSIONS: usize = 2;

/// Maximum strengths reported on a learning path.
pub const MAX_STRENGTHS: usize = 5;

/// Maximum modules on a learning path.
pub const MAX_LEARNING_MODULES: usize = 10;

// ---- Progress analytics ----

/// Slopes with magnitude at or below this are classified as stable.
pub const TREND_SLOPE_THRESHOLD: f64 = 0.1;

/// Minimum samples for a trend fit.
pub const MIN_TREND_SAMPLES: usize = 2;

/// Trailing window for the current average.
pub const CURRENT_AVERAGE_WINDOW: usize = 5;

/// Minimum raw samples for a velocity estimate.
pub const MIN_VELOCITY_SAMPLES: usize = 5;

/// Upper bound on the rolling-mean window used for velocity.
pub const MAX_ROLLING_WINDOW: usize = 5;

/// Velocity above this is fast.
pub const VELOCITY_FAST: f64 = 2.0;

/// Velocity above this is moderate.
pub const VELOCITY_MODERATE: f64 = 0.5;

/// Velocity above this is slow; anything lower is declining.
pub const VELOCITY_SLOW: f64 = -0.5;

/// Mean second difference beyond this magnitude counts as acceleration.
pub const ACCELERATION_THRESHOLD: f64 = 0.5;

/// Minimum samples for a consistency score.
pub const MIN_CONSISTENCY_SAMPLES: usize = 2;

/// Session frequency (per week) at or above this is high.
pub const SESSIONS_PER_WEEK_HIGH: f64 = 5.0;

/// Session frequency (per week) at or above this is moderate.
pub const SESSIONS_PER_WEEK_MODERATE: f64 = 2.0;

/// Session frequency (per week) at or above this is low; anything lower is very low.
pub const SESSIONS_PER_WEEK_LOW: f64 = 0.5;

/// Submission counts that award a milestone.
pub const SUBMISSION_COUNT_MILESTONES: [u32; 4] = [10, 25, 50, 100];

/// Quality scores that award a milestone the first time they are reached.
pub const QUALITY_SCORE_MILESTONES: [u32; 3] = [60, 80, 90];

/// Average concept score and attempts needed for `mastered`.
pub const MASTERED_SCORE: f64 = 80.0;
pub const MASTERED_ATTEMPTS: usize = 3;

/// Average concept score and attempts needed for `proficient`.
pub const PROFICIENT_SCORE: f64 = 60.0;
pub const PROFICIENT_ATTEMPTS: usize = 2;

/// Average concept score at or above this is `learning`; below is `struggling`.
pub const LEARNING_SCORE: f64 = 40.0;

/// Trailing attempts compared against earlier ones for a concept trend.
pub const CONCEPT_TREND_RECENT: usize = 3;

/// Average score change beyond this marks a concept as improving or declining.
pub const CONCEPT_TREND_DELTA: f64 = 5.0;

/// Submissions needed before progress advice looks at scores.
pub const ADVICE_MIN_SUBMISSIONS: usize = 5;

/// Trailing submissions whose average drives progress advice.
pub const ADVICE_RECENT_WINDOW: usize = 5;

/// Recent averages below these select fundamentals or optimization advice.
pub const ADVICE_FUNDAMENTALS_BELOW: f64 = 50.0;
pub const ADVICE_OPTIMIZE_BELOW: f64 = 70.0;

/// Submissions per day below this earn a practice-schedule reminder.
pub const ADVICE_MIN_DAILY_RATE: f64 = 0.2;

// ---- Metric names ----

/// Quality score recorded per submission.
pub const METRIC_CODE_QUALITY: &str = "code_quality";

/// Complexity score recorded per submission.
pub const METRIC_COMPLEXITY_HANDLING: &str = "complexity_handling";

/// One count per analysis session.
pub const METRIC_LEARNING_SESSION: &str = "learning_session";

/// Prefix of per-concept quality metrics (`concept.hash_table`).
pub const METRIC_CONCEPT_PREFIX: &str = "concept.";

//! # mentor-progress
//!
//! Progress Trend Analytics over a learner's append-only metric history: least-squares
//! trends, learning velocity, consistency, session frequency, trajectory, milestones and
//! per-concept mastery.
//! Insufficient history is a reportable outcome, never an error.

pub mod advice;
pub mod analyzer;
pub mod consistency;
pub mod mastery;
pub mod milestones;
pub mod sample;
pub mod sessions;
pub mod store;
pub mod trajectory;
pub mod trend;
pub mod velocity;

pub use advice::progress_advice;
pub use analyzer::{ProgressAnalyzer, ProgressReport};
pub use consistency::consistency_score;
pub use mastery::{concept_mastery, ConceptMastery, ConceptTrend, MasteryLevel, MasterySummary};
pub use milestones::{milestones, new_milestones, Milestone, MilestoneKey};
pub use sample::{
    concept_metric, concept_of, samples_from_analysis, MetricKind, ProgressMetricSample,
};
pub use sessions::{session_frequency, SessionFrequency, SessionFrequencyCategory};
pub use store::{InMemoryMetricHistoryStore, MetricHistoryStore};
pub use trajectory::{classify_trajectory, Trajectory};
pub use trend::{TrendDirection, TrendSummary};
pub use velocity::{Acceleration, VelocityCategory, VelocitySummary};

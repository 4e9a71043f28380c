//! Boundary validation errors for caller-supplied scalars and tags.

use super::error_code::{self, MentorErrorCode};

/// Rejected input. Raised before any computation proceeds.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("metric {metric} has non-finite value {value}")]
    NonFiniteValue { metric: String, value: f64 },

    #[error("count metric {metric} has negative value {value}")]
    NegativeCount { metric: String, value: f64 },

    #[error("sample for {learner_id}/{metric} recorded before the latest stored sample")]
    OutOfOrder { learner_id: String, metric: String },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("unknown skill level: {0}")]
    UnknownSkillLevel(String),

    #[error("unknown metric kind: {0}")]
    UnknownMetricKind(String),
}

impl MentorErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}

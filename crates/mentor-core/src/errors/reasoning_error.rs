//! External reasoning service errors.

use super::error_code::{self, MentorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReasoningError {
    #[error("reasoning service unavailable")]
    Unavailable,

    #[error("reasoning service failed: {0}")]
    Failed(String),

    #[error("reasoning service returned an unusable response: {0}")]
    MalformedResponse(String),
}

impl MentorErrorCode for ReasoningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable => error_code::REASONING_UNAVAILABLE,
            _ => error_code::REASONING_ERROR,
        }
    }
}

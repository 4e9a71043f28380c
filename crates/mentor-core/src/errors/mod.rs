//! Error handling for the mentor engines.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod reasoning_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::MentorErrorCode;
pub use graph_error::ConceptGraphError;
pub use reasoning_error::ReasoningError;
pub use validation_error::ValidationError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MentorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Concept graph error: {0}")]
    Graph(#[from] ConceptGraphError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Reasoning service error: {0}")]
    Reasoning(#[from] ReasoningError),
}

impl MentorErrorCode for MentorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Reasoning(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type MentorResult<T> = Result<T, MentorError>;

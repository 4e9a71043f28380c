//! Concept graph errors. All of these indicate a configuration bug.

use super::error_code::{self, MentorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConceptGraphError {
    #[error("cycle detected in concept graph: {path}")]
    CycleDetected { path: String },

    #[error("duplicate concept id: {id}")]
    DuplicateConcept { id: String },

    #[error("concept {concept} lists unknown prerequisite {prerequisite}")]
    UnknownPrerequisite { concept: String, prerequisite: String },

    #[error("concept {id} has importance {importance} outside [0, 1]")]
    InvalidImportance { id: String, importance: f64 },
}

impl MentorErrorCode for ConceptGraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CycleDetected { .. } => error_code::GRAPH_CYCLE,
            _ => error_code::GRAPH_ERROR,
        }
    }
}

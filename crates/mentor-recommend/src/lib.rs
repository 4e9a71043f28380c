//! # mentor-recommend
//!
//! Concept Graph Recommendation Engine.
//!
//! An analysis result is turned into knowledge gaps, and the gaps are mapped onto a
//! static prerequisite graph to produce a ranked, deduplicated [`RecommendationSet`].
//! The graph is validated once at construction and never mutated.

pub mod advice;
pub mod catalog;
pub mod engine;
pub mod gaps;
pub mod graph;
pub mod path;
pub mod priority;
pub mod types;

pub use engine::RecommendationEngine;
pub use gaps::identify_gaps;
pub use graph::{ConceptGraph, ConceptNode};
pub use types::{
    GapCategory, KnowledgeGap, LearnerProfile, LearningModule, LearningPath,
    LearningRecommendation, PracticeProblem, Priority, RecommendationCategory, RecommendationSet,
    Resource, ResourceKind, Severity,
};

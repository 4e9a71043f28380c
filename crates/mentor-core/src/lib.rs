//! # mentor-core
//!
//! Foundation crate for the mentor engines.
//! Defines shared types, errors, config, tracing setup, named constants,
//! and the external reasoning seam. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::MentorConfig;
pub use errors::{MentorError, MentorResult};
pub use types::{ComplexityClass, ConceptId, Difficulty, SkillLevel};

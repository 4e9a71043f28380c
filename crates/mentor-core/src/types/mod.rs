//! Shared value types used by all three engines.

pub mod collections;
pub mod complexity;
pub mod concept;
pub mod skill;

pub use collections::{FxHashMap, FxHashSet};
pub use complexity::ComplexityClass;
pub use concept::{ConceptId, ConceptSet};
pub use skill::{Difficulty, SkillLevel};

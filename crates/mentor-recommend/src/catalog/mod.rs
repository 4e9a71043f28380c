//! Static study resources, practice problems and learning-path content keyed by concept id.

pub mod modules;
pub mod problems;
pub mod resources;

pub use modules::{difficulty_progression, objectives_for, track_for, SkillTrack};
pub use problems::{problems_for, CatalogProblem};
pub use resources::{resources_for, CatalogResource};

//! Collaborator seams implemented outside the deterministic core.

pub mod reasoning;

pub use reasoning::{enrich, Enriched, Narrative, NoOpReasoner, ReasoningService};

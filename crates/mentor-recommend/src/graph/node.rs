//! Concept node definition.

use mentor_core::types::collections::SmallVec4;
use mentor_core::types::ConceptSet;
use mentor_core::{ConceptId, Difficulty};
use serde::{Deserialize, Serialize};

/// A concept in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: ConceptId,
    /// Concepts that must be mastered first. Declaration order, no duplicates.
    pub prerequisites: SmallVec4<ConceptId>,
    /// Informational forward edges. Targets need not be nodes.
    pub leads_to: Vec<ConceptId>,
    pub difficulty: Difficulty,
    /// Weight in [0, 1].
    pub importance: f64,
    /// Study time at intermediate skill. `None` uses the configured default.
    pub base_minutes: Option<u32>,
}

impl ConceptNode {
    pub fn new(id: impl Into<ConceptId>, difficulty: Difficulty, importance: f64) -> Self {
        Self {
            id: id.into(),
            prerequisites: SmallVec4::new(),
            leads_to: Vec::new(),
            difficulty,
            importance,
            base_minutes: None,
        }
    }

    pub fn requires<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ConceptId>,
    {
        for prerequisite in prerequisites {
            let prerequisite = prerequisite.into();
            if !self.prerequisites.contains(&prerequisite) {
                self.prerequisites.push(prerequisite);
            }
        }
        self
    }

    pub fn leads_to<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ConceptId>,
    {
        self.leads_to.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn with_base_minutes(mut self, minutes: u32) -> Self {
        self.base_minutes = Some(minutes);
        self
    }

    /// Prerequisites not present in `mastered`, in declaration order.
    pub fn unmet_prerequisites<'a>(
        &'a self,
        mastered: &'a ConceptSet,
    ) -> impl Iterator<Item = &'a ConceptId> + 'a {
        self.prerequisites
            .iter()
            .filter(move |p| !mastered.contains(*p))
    }

    pub fn prerequisites_met(&self, mastered: &ConceptSet) -> bool {
        self.unmet_prerequisites(mastered).next().is_none()
    }
}

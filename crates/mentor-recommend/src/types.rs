//! Recommendation engine data model.

use std::fmt;

use mentor_core::types::collections::SmallVec4;
use mentor_core::types::ConceptSet;
use mentor_core::{ConceptId, Difficulty, SkillLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    Fundamental,
    Performance,
    Pattern,
}

/// Ordered `low < medium < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Ordered `low < medium < high`; ranked lists are sorted descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl From<Severity> for Priority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => Priority::Low,
            Severity::Medium => Priority::Medium,
            Severity::High => Priority::High,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        })
    }
}

/// A missing or weak concept. Recomputed per analysis, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGap {
    pub concept: ConceptId,
    pub category: GapCategory,
    pub severity: Severity,
    pub reason: String,
}

impl KnowledgeGap {
    pub fn new(
        concept: impl Into<ConceptId>,
        category: GapCategory,
        severity: Severity,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            concept: concept.into(),
            category,
            severity,
            reason: reason.into(),
        }
    }
}

/// Why a concept was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Fundamental,
    Performance,
    Pattern,
    /// Unmet prerequisite of a gap concept.
    Prerequisite,
}

impl From<GapCategory> for RecommendationCategory {
    fn from(category: GapCategory) -> Self {
        match category {
            GapCategory::Fundamental => RecommendationCategory::Fundamental,
            GapCategory::Performance => RecommendationCategory::Performance,
            GapCategory::Pattern => RecommendationCategory::Pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Article,
    Tutorial,
    Video,
    Problem,
}

/// A study resource from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub concept: ConceptId,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub prerequisites: SmallVec4<ConceptId>,
    pub leads_to: Vec<ConceptId>,
    /// Set for prerequisite recommendations.
    pub reason: Option<String>,
    pub resources: Vec<Resource>,
}

/// A practice problem attached to a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub concept: ConceptId,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: String,
    pub estimated_minutes: u32,
    pub priority: Priority,
}

/// Ranked output. `recommendations` is sorted by priority, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub learner_id: Option<String>,
    pub skill_level: SkillLevel,
    pub knowledge_gaps: Vec<KnowledgeGap>,
    pub recommendations: Vec<LearningRecommendation>,
    pub practice_problems: Vec<PracticeProblem>,
    pub improvement_suggestions: Vec<String>,
    pub estimated_total_minutes: u32,
}

impl RecommendationSet {
    pub fn contains(&self, concept: &str) -> bool {
        self.recommendations.iter().any(|r| r.concept.as_str() == concept)
    }

    pub fn get(&self, concept: &str) -> Option<&LearningRecommendation> {
        self.recommendations.iter().find(|r| r.concept.as_str() == concept)
    }
}

/// What the caller knows about the learner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub learner_id: Option<String>,
    pub skill_level: SkillLevel,
    pub mastered_concepts: ConceptSet,
    pub recent_concept_history: ConceptSet,
}

impl LearnerProfile {
    /// No history, nothing mastered, beginner.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(learner_id: impl Into<String>, skill_level: SkillLevel) -> Self {
        Self {
            learner_id: Some(learner_id.into()),
            skill_level,
            ..Self::default()
        }
    }

    pub fn with_mastered<I, S>(mut self, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ConceptId>,
    {
        self.mastered_concepts.extend(concepts.into_iter().map(Into::into));
        self
    }

    /// Fold the concept sets of the most recent submissions (newest first) into the
    /// history window, keeping at most `window` submissions.
    pub fn with_recent_submissions(mut self, submissions: &[ConceptSet], window: usize) -> Self {
        for concepts in submissions.iter().take(window) {
            self.recent_concept_history.extend(concepts.iter().cloned());
        }
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.learner_id.is_none()
    }
}

/// One step of a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningModule {
    pub concept: ConceptId,
    pub title: String,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub estimated_minutes: u32,
    pub prerequisites: SmallVec4<ConceptId>,
    pub objectives: Vec<String>,
    pub resources: Vec<Resource>,
}

/// Study plan built from a learner's submission history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub learner_id: Option<String>,
    pub skill_level: SkillLevel,
    /// Concepts used in more than one submission, most frequent first.
    pub strengths: Vec<ConceptId>,
    /// Core concepts never used and not mastered, in study order.
    pub weaknesses: Vec<ConceptId>,
    /// Weakness modules in study order, then the skill-level track.
    pub modules: Vec<LearningModule>,
    pub estimated_total_minutes: u32,
    /// Practice problem difficulties suited to the learner.
    pub difficulty_progression: Vec<Difficulty>,
}

//! The Concept Graph Recommendation Engine.
//!
//! Gaps are mapped onto the concept graph. A gap whose prerequisites are all mastered is
//! recommended directly; otherwise each unmet prerequisite is recommended at high priority
//! in its place. The list is deduplicated, stably sorted by priority and truncated.

use mentor_analysis::CodeAnalysisResult;
use mentor_core::config::RecommendConfig;
use mentor_core::constants::MAX_LEARNING_MODULES;
use mentor_core::errors::ConceptGraphError;
use mentor_core::traits::{enrich, Enriched, ReasoningService};
use mentor_core::types::{ConceptSet, FxHashMap};
use mentor_core::{ConceptId, SkillLevel};
use tracing::{debug, info, instrument, warn};

use crate::advice;
use crate::catalog;
use crate::catalog::modules::display_name;
use crate::gaps;
use crate::graph::{ConceptGraph, ConceptNode};
use crate::path;
use crate::priority::{calculate_priority, estimate_minutes};
use crate::types::{
    KnowledgeGap, LearnerProfile, LearningModule, LearningPath, LearningRecommendation,
    PracticeProblem, Priority, RecommendationCategory, RecommendationSet, Resource, Severity,
};

/// Holds the read-only concept graph and the configured limits.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    graph: ConceptGraph,
    max_recommendations: usize,
    max_resources_per_concept: usize,
    max_practice_problems: usize,
    default_base_minutes: u32,
    recent_history_window: usize,
}

impl RecommendationEngine {
    pub fn new(graph: ConceptGraph, config: &RecommendConfig) -> Self {
        info!(concepts = graph.len(), "recommendation engine ready");
        Self {
            graph,
            max_recommendations: config.effective_max_recommendations(),
            max_resources_per_concept: config.effective_max_resources_per_concept(),
            max_practice_problems: config.effective_max_practice_problems(),
            default_base_minutes: config.effective_default_base_minutes(),
            recent_history_window: config.effective_recent_history_window(),
        }
    }

    /// Engine over the built-in concept graph.
    pub fn standard(config: &RecommendConfig) -> Result<Self, ConceptGraphError> {
        Ok(Self::new(ConceptGraph::standard()?, config))
    }

    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    pub fn recent_history_window(&self) -> usize {
        self.recent_history_window
    }

    /// Fold the concept sets of recent submissions (newest first) into `profile`,
    /// keeping only the configured history window.
    pub fn with_history(
        &self,
        profile: LearnerProfile,
        submissions: &[ConceptSet],
    ) -> LearnerProfile {
        profile.with_recent_submissions(submissions, self.recent_history_window)
    }

    pub fn identify_gaps(
        &self,
        analysis: &CodeAnalysisResult,
        recent_history: &ConceptSet,
    ) -> Vec<KnowledgeGap> {
        gaps::identify_gaps(analysis, recent_history)
    }

    /// Rank recommendations for `gaps`.
    ///
    /// Gaps naming a concept the graph does not know are kept in `knowledge_gaps` but
    /// produce no recommendation.
    ///
    /// Prerequisite substitution is one level deep: an unmet prerequisite is recommended
    /// even when its own prerequisites are unmet too. A `memoization` gap with nothing
    /// mastered yields `recursion` and `hash_table`, not `function_basics` or `array`.
    #[instrument(skip_all, fields(gaps = gaps.len(), skill = %skill_level))]
    pub fn recommend(
        &self,
        gaps: &[KnowledgeGap],
        skill_level: SkillLevel,
        mastered: &ConceptSet,
    ) -> RecommendationSet {
        self.rank(gaps, skill_level, mastered, None)
    }

    fn rank(
        &self,
        gaps: &[KnowledgeGap],
        skill_level: SkillLevel,
        mastered: &ConceptSet,
        analysis: Option<&CodeAnalysisResult>,
    ) -> RecommendationSet {
        let mut raw = Vec::new();
        for gap in gaps {
            let Some(node) = self.graph.get(gap.concept.as_str()) else {
                warn!(concept = %gap.concept, "gap concept not in graph, no recommendation");
                continue;
            };

            if node.prerequisites_met(mastered) {
                let priority = calculate_priority(gap.severity, node.importance);
                raw.push(self.recommendation(node, gap.category.into(), priority, skill_level, None));
                continue;
            }

            for prerequisite in node.unmet_prerequisites(mastered) {
                match self.graph.get(prerequisite.as_str()) {
                    Some(prereq) => raw.push(self.recommendation(
                        prereq,
                        RecommendationCategory::Prerequisite,
                        Priority::High,
                        skill_level,
                        Some(format!("Prerequisite for {}", node.id)),
                    )),
                    None => warn!(%prerequisite, "prerequisite not in graph"),
                }
            }
        }

        let mut recommendations = dedup_keep_highest(raw);
        // Vec::sort_by is stable, so equal priorities keep discovery order.
        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
        recommendations.truncate(self.max_recommendations);

        let practice_problems = self.practice_problems(gaps);
        let estimated_total_minutes = recommendations.iter().map(|r| r.estimated_minutes).sum();
        debug!(
            recommendations = recommendations.len(),
            problems = practice_problems.len(),
            estimated_total_minutes,
            "recommendations ranked"
        );

        RecommendationSet {
            learner_id: None,
            skill_level,
            knowledge_gaps: gaps.to_vec(),
            recommendations,
            practice_problems,
            improvement_suggestions: advice::improvement_suggestions(analysis, gaps),
            estimated_total_minutes,
        }
    }

    /// Gap identification and ranking for one analysis and learner.
    ///
    /// Anonymous profiles run the same path with nothing mastered and beginner skill.
    pub fn generate(
        &self,
        analysis: &CodeAnalysisResult,
        profile: &LearnerProfile,
    ) -> RecommendationSet {
        let gaps = self.identify_gaps(analysis, &profile.recent_concept_history);
        let mut set = self.rank(
            &gaps,
            profile.skill_level,
            &profile.mastered_concepts,
            Some(analysis),
        );
        set.learner_id = profile.learner_id.clone();
        set
    }

    /// [`generate`](Self::generate) plus an optional narrative from `reasoner`.
    /// The ranked set is identical whether or not the narrative is present.
    pub fn generate_enriched(
        &self,
        analysis: &CodeAnalysisResult,
        profile: &LearnerProfile,
        reasoner: &dyn ReasoningService,
    ) -> Enriched<RecommendationSet> {
        enrich(self.generate(analysis, profile), "recommendations", reasoner)
    }

    /// Study plan from the learner's submission history (concept sets, any order).
    ///
    /// Weak concepts become modules in prerequisite order, each at the priority a
    /// high-severity gap would get. The track for the learner's level closes the path.
    #[instrument(skip_all, fields(submissions = history.len(), skill = %profile.skill_level))]
    pub fn learning_path(
        &self,
        profile: &LearnerProfile,
        history: &[ConceptSet],
    ) -> LearningPath {
        let skill_level = profile.skill_level;
        let strengths = path::strengths(history);
        let weaknesses = path::weaknesses(&self.graph, history, &profile.mastered_concepts);

        let mut modules: Vec<LearningModule> = weaknesses
            .iter()
            .filter_map(|id| self.graph.get(id.as_str()))
            .map(|node| LearningModule {
                concept: node.id.clone(),
                title: format!("Master {}", display_name(node.id.as_str())),
                difficulty: node.difficulty,
                priority: calculate_priority(Severity::High, node.importance),
                estimated_minutes: estimate_minutes(
                    node.base_minutes.unwrap_or(self.default_base_minutes),
                    skill_level,
                ),
                prerequisites: node.prerequisites.clone(),
                objectives: catalog::objectives_for(node.id.as_str()),
                resources: self.resources(&node.id, skill_level),
            })
            .collect();

        let track = catalog::track_for(skill_level);
        modules.push(LearningModule {
            concept: ConceptId::from(track.concept),
            title: track.title.to_string(),
            difficulty: track.difficulty,
            priority: Priority::Low,
            estimated_minutes: track.estimated_minutes,
            prerequisites: Default::default(),
            objectives: track.objectives.iter().map(|o| o.to_string()).collect(),
            resources: Vec::new(),
        });
        modules.truncate(MAX_LEARNING_MODULES);

        let estimated_total_minutes = modules.iter().map(|m| m.estimated_minutes).sum();
        debug!(
            strengths = strengths.len(),
            weaknesses = weaknesses.len(),
            modules = modules.len(),
            "learning path built"
        );
        LearningPath {
            learner_id: profile.learner_id.clone(),
            skill_level,
            strengths,
            weaknesses,
            modules,
            estimated_total_minutes,
            difficulty_progression: catalog::difficulty_progression(skill_level),
        }
    }

    fn recommendation(
        &self,
        node: &ConceptNode,
        category: RecommendationCategory,
        priority: Priority,
        skill_level: SkillLevel,
        reason: Option<String>,
    ) -> LearningRecommendation {
        let base = node.base_minutes.unwrap_or(self.default_base_minutes);
        LearningRecommendation {
            concept: node.id.clone(),
            category,
            priority,
            difficulty: node.difficulty,
            estimated_minutes: estimate_minutes(base, skill_level),
            prerequisites: node.prerequisites.clone(),
            leads_to: node.leads_to.clone(),
            reason,
            resources: self.resources(&node.id, skill_level),
        }
    }

    /// At most `max_resources_per_concept`, no more than one level above the learner.
    fn resources(&self, concept: &ConceptId, skill_level: SkillLevel) -> Vec<Resource> {
        catalog::resources_for(concept.as_str())
            .iter()
            .filter(|r| skill_level.can_tackle(r.difficulty))
            .take(self.max_resources_per_concept)
            .map(|r| r.to_resource())
            .collect()
    }

    fn practice_problems(&self, gaps: &[KnowledgeGap]) -> Vec<PracticeProblem> {
        gaps.iter()
            .flat_map(|gap| {
                catalog::problems_for(gap.concept.as_str())
                    .iter()
                    .map(move |p| p.to_problem(&gap.concept, gap.severity.into()))
            })
            .take(self.max_practice_problems)
            .collect()
    }
}

/// One entry per concept at the position it first appeared, carrying the highest
/// priority seen for it.
fn dedup_keep_highest(raw: Vec<LearningRecommendation>) -> Vec<LearningRecommendation> {
    let mut position: FxHashMap<ConceptId, usize> = FxHashMap::default();
    let mut out: Vec<LearningRecommendation> = Vec::with_capacity(raw.len());
    for rec in raw {
        match position.get(&rec.concept) {
            Some(&idx) => {
                if rec.priority > out[idx].priority {
                    out[idx] = rec;
                }
            }
            None => {
                position.insert(rec.concept.clone(), out.len());
                out.push(rec);
            }
        }
    }
    out
}

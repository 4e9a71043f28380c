//! Integration tests for the recommendation engine.

use mentor_analysis::analyze;
use mentor_core::config::RecommendConfig;
use mentor_core::errors::ReasoningError;
use mentor_core::traits::{Narrative, ReasoningService};
use mentor_core::types::concept::concept_set;
use mentor_core::types::ConceptSet;
use mentor_core::SkillLevel;
use mentor_recommend::advice::{LEARN_TWO_POINTERS, REDUCE_QUADRATIC};
use mentor_recommend::{
    identify_gaps, ConceptGraph, ConceptNode, GapCategory, KnowledgeGap, LearnerProfile,
    Priority, RecommendationCategory, RecommendationEngine, Severity,
};

const NESTED_DUPLICATES: &str = "\
def has_duplicate(items):
    for first in range(len(items)):
        for second in range(len(items)):
            if first != second and items[first] == items[second]:
                return True
    return False
";

const DICT_TWO_SUM: &str = "\
def two_sum(nums, target):
    seen = {}
    for idx, num in enumerate(nums):
        if target - num in seen:
            return [seen[target - num], idx]
        seen[num] = idx
    return []
";

fn engine() -> RecommendationEngine {
    RecommendationEngine::standard(&RecommendConfig::default()).unwrap()
}

/// A quadratic submission yields a medium performance gap.
#[test]
fn test_quadratic_submission_has_performance_gap() {
    let analysis = analyze(NESTED_DUPLICATES, "python");
    let gaps = identify_gaps(&analysis, &ConceptSet::new());
    let perf: Vec<&KnowledgeGap> = gaps
        .iter()
        .filter(|g| g.category == GapCategory::Performance)
        .collect();
    assert_eq!(perf.len(), 1);
    assert_eq!(perf[0].severity, Severity::Medium);
    assert_eq!(perf[0].concept.as_str(), "algorithmic_optimization");

    let set = engine().generate(&analysis, &LearnerProfile::anonymous());
    assert!(set
        .improvement_suggestions
        .contains(&REDUCE_QUADRATIC.to_string()));
}

/// An unmet prerequisite is recommended at high priority instead of the concept.
#[test]
fn test_unmet_prerequisite_takes_precedence() {
    let graph = ConceptGraph::from_nodes(vec![
        ConceptNode::new("recursion", SkillLevel::Intermediate, 0.9),
        ConceptNode::new("memoization", SkillLevel::Intermediate, 0.8).requires(["recursion"]),
    ])
    .unwrap();
    let engine = RecommendationEngine::new(graph, &RecommendConfig::default());
    let gaps = [KnowledgeGap::new(
        "memoization",
        GapCategory::Pattern,
        Severity::High,
        "missing",
    )];

    let set = engine.recommend(&gaps, SkillLevel::Intermediate, &concept_set(["array", "hash_table"]));
    let recursion = set.get("recursion").unwrap();
    assert_eq!(recursion.priority, Priority::High);
    assert_eq!(recursion.category, RecommendationCategory::Prerequisite);
    assert!(!set.contains("memoization"));
}

/// Same precedence on the built-in graph, where memoization also needs hash_table.
#[test]
fn test_standard_graph_memoization_needs_recursion() {
    let gaps = [KnowledgeGap::new(
        "memoization",
        GapCategory::Pattern,
        Severity::High,
        "missing",
    )];
    let set = engine().recommend(&gaps, SkillLevel::Beginner, &concept_set(["array", "hash_table"]));
    let concepts: Vec<&str> = set.recommendations.iter().map(|r| r.concept.as_str()).collect();
    assert_eq!(concepts, vec!["recursion"]);
    assert_eq!(set.recommendations[0].estimated_minutes, 270);
}

/// Anonymous learners run the same path with nothing mastered.
#[test]
fn test_anonymous_profile_recommends_foundations() {
    let analysis = analyze(DICT_TWO_SUM, "python");
    let set = engine().generate(&analysis, &LearnerProfile::anonymous());

    assert!(set.learner_id.is_none());
    assert_eq!(set.skill_level, SkillLevel::Beginner);
    let gap_concepts: Vec<&str> = set.knowledge_gaps.iter().map(|g| g.concept.as_str()).collect();
    assert_eq!(gap_concepts, vec!["linked_list", "recursion", "two_pointers"]);

    let concepts: Vec<&str> = set.recommendations.iter().map(|r| r.concept.as_str()).collect();
    assert_eq!(concepts, vec!["array", "function_basics"]);
    assert!(set.recommendations.iter().all(|r| r.priority == Priority::High));
    assert_eq!(set.get("array").unwrap().estimated_minutes, 90);
    assert_eq!(set.get("array").unwrap().resources.len(), 2);
    assert_eq!(set.estimated_total_minutes, 90 + 180);

    assert!(set
        .improvement_suggestions
        .contains(&LEARN_TWO_POINTERS.to_string()));
    let mut sorted = set.improvement_suggestions.clone();
    sorted.sort();
    assert_eq!(sorted, set.improvement_suggestions);
}

/// The profile path merges analyzer hints with gap advice in a single sorted list.
#[test]
fn test_generate_merges_analysis_suggestions_once() {
    let analysis = analyze(NESTED_DUPLICATES, "python");
    let set = engine().generate(&analysis, &LearnerProfile::anonymous());
    for hint in &analysis.suggestions {
        assert_eq!(
            set.improvement_suggestions.iter().filter(|s| *s == hint).count(),
            1,
            "{hint} should appear exactly once"
        );
    }
    let mut deduped = set.improvement_suggestions.clone();
    deduped.dedup();
    assert_eq!(deduped, set.improvement_suggestions);

    // The gap-only path has no analysis hints to merge.
    let bare = engine().recommend(&set.knowledge_gaps, SkillLevel::Beginner, &ConceptSet::new());
    assert!(!bare.improvement_suggestions.contains(&REDUCE_QUADRATIC.to_string()));
}

/// Concepts seen in recent submissions do not count as fundamental gaps.
#[test]
fn test_recent_history_suppresses_fundamental_gaps() {
    let analysis = analyze(DICT_TWO_SUM, "python");
    let history = [concept_set(["linked_list"]), concept_set(["recursion"])];
    let engine = engine();
    let profile = engine.with_history(
        LearnerProfile::new("learner-1", SkillLevel::Intermediate),
        &history,
    );

    let gaps = engine.identify_gaps(&analysis, &profile.recent_concept_history);
    assert!(gaps.iter().all(|g| g.category != GapCategory::Fundamental));
}

/// Only the configured number of recent submissions enters the history.
#[test]
fn test_history_window_limits_submissions() {
    let history = [
        concept_set(["array"]),
        concept_set(["stack"]),
        concept_set(["recursion"]),
    ];
    let profile = LearnerProfile::anonymous().with_recent_submissions(&history, 2);
    assert!(profile.recent_concept_history.contains("stack"));
    assert!(!profile.recent_concept_history.contains("recursion"));
}

/// Mastered prerequisites let the gap concept through with the computed priority.
#[test]
fn test_mastered_learner_gets_direct_recommendations() {
    let analysis = analyze(DICT_TWO_SUM, "python");
    let profile = LearnerProfile::new("learner-2", SkillLevel::Advanced)
        .with_mastered(["array", "function_basics"]);
    let set = engine().generate(&analysis, &profile);

    assert_eq!(set.learner_id.as_deref(), Some("learner-2"));
    let concepts: Vec<&str> = set.recommendations.iter().map(|r| r.concept.as_str()).collect();
    // recursion: high severity, importance 0.9. linked_list and two_pointers: medium.
    assert_eq!(concepts, vec!["recursion", "linked_list", "two_pointers"]);
    assert_eq!(set.get("recursion").unwrap().priority, Priority::High);
    assert_eq!(set.get("recursion").unwrap().estimated_minutes, 126);
    assert_eq!(set.get("two_pointers").unwrap().priority, Priority::Medium);
}

/// The configured cap truncates after sorting.
#[test]
fn test_max_recommendations_from_config() {
    let config = RecommendConfig {
        max_recommendations: Some(1),
        ..RecommendConfig::default()
    };
    let engine = RecommendationEngine::standard(&config).unwrap();
    let analysis = analyze(DICT_TWO_SUM, "python");
    let profile = LearnerProfile::anonymous().with_mastered(["array", "function_basics"]);
    let set = engine.generate(&analysis, &profile);
    assert_eq!(set.recommendations.len(), 1);
    assert_eq!(set.recommendations[0].concept.as_str(), "recursion");
}

/// Wire shape uses snake_case tags.
#[test]
fn test_serialized_shape() {
    let gaps = [KnowledgeGap::new(
        "tree",
        GapCategory::Fundamental,
        Severity::High,
        "missing",
    )];
    let set = engine().recommend(&gaps, SkillLevel::Beginner, &concept_set(["recursion"]));
    let json = serde_json::to_value(&set).unwrap();
    let first = &json["recommendations"][0];
    assert_eq!(first["concept"], "linked_list");
    assert_eq!(first["priority"], "high");
    assert_eq!(first["category"], "prerequisite");
    assert_eq!(first["difficulty"], "beginner");
    assert_eq!(json["knowledge_gaps"][0]["severity"], "high");
}

/// A failing narrative service leaves the ranked set untouched.
#[test]
fn test_enrichment_is_optional() {
    struct Offline;
    impl ReasoningService for Offline {
        fn narrate(&self, _: &str, _: &serde_json::Value) -> Result<Narrative, ReasoningError> {
            Err(ReasoningError::Failed("connection refused".to_string()))
        }
    }
    struct Summarizer;
    impl ReasoningService for Summarizer {
        fn narrate(
            &self,
            subject: &str,
            payload: &serde_json::Value,
        ) -> Result<Narrative, ReasoningError> {
            let count = payload["recommendations"].as_array().map_or(0, Vec::len);
            Ok(Narrative::new(format!("{subject}: {count} topics")))
        }
    }

    let engine = engine();
    let analysis = analyze(DICT_TWO_SUM, "python");
    let profile = LearnerProfile::anonymous();
    let plain = engine.generate(&analysis, &profile);

    let offline = engine.generate_enriched(&analysis, &profile, &Offline);
    assert_eq!(offline.core, plain);
    assert!(offline.enrichment.is_none());

    let enriched = engine.generate_enriched(&analysis, &profile, &Summarizer);
    assert_eq!(enriched.core, plain);
    let expected = format!("recommendations: {} topics", plain.recommendations.len());
    assert_eq!(enriched.enrichment.unwrap().summary, expected);
}

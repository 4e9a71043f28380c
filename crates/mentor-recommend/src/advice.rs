//! Improvement suggestions shown next to the ranked recommendations.

use std::collections::BTreeSet;

use mentor_analysis::CodeAnalysisResult;
use mentor_core::ComplexityClass;

use crate::types::KnowledgeGap;

pub const LEARN_TWO_POINTERS: &str = "Learn the two pointers technique to optimize array problems";
pub const STUDY_DYNAMIC_PROGRAMMING: &str =
    "Study dynamic programming patterns to solve optimization problems";
pub const USE_HASH_TABLES: &str = "Use hash tables for O(1) lookups and to avoid nested loops";
pub const REDUCE_QUADRATIC: &str =
    "Consider using hash tables or two pointers to reduce time complexity";

fn gap_advice(concept: &str) -> Option<&'static str> {
    match concept {
        "two_pointers" => Some(LEARN_TWO_POINTERS),
        "dynamic_programming" => Some(STUDY_DYNAMIC_PROGRAMMING),
        "hash_table" => Some(USE_HASH_TABLES),
        _ => None,
    }
}

/// Analyzer suggestions, gap advice, and the quadratic-time hint. Deduplicated and sorted.
pub fn improvement_suggestions(
    analysis: Option<&CodeAnalysisResult>,
    gaps: &[KnowledgeGap],
) -> Vec<String> {
    let mut out: BTreeSet<String> = BTreeSet::new();
    if let Some(analysis) = analysis {
        out.extend(analysis.suggestions.iter().cloned());
        if analysis.time_complexity == ComplexityClass::ON2 {
            out.insert(REDUCE_QUADRATIC.to_string());
        }
    }
    out.extend(
        gaps.iter()
            .filter_map(|gap| gap_advice(gap.concept.as_str()))
            .map(str::to_string),
    );
    out.into_iter().collect()
}

//! Knowledge gap identification.

use mentor_analysis::{CodeAnalysisResult, CodingPattern, DataStructureKind};
use mentor_core::constants::{FUNDAMENTAL_CONCEPTS, OPTIMIZATION_CONCEPT};
use mentor_core::types::ConceptSet;

use crate::types::{GapCategory, KnowledgeGap, Severity};

pub const SUBOPTIMAL_COMPLEXITY_REASON: &str = "Code has suboptimal time complexity";
pub const TWO_POINTERS_REASON: &str =
    "Array problems can often be optimized with two pointers technique";

/// Gaps for one analysis, in discovery order: fundamentals, performance, then pattern.
///
/// Each rule is independent; one submission can trigger all of them.
pub fn identify_gaps(analysis: &CodeAnalysisResult, recent_history: &ConceptSet) -> Vec<KnowledgeGap> {
    let detected = analysis.detected_concepts();
    let mut gaps = Vec::new();

    for concept in FUNDAMENTAL_CONCEPTS {
        if !detected.contains(concept) && !recent_history.contains(concept) {
            gaps.push(KnowledgeGap::new(
                concept,
                GapCategory::Fundamental,
                Severity::High,
                format!("Missing fundamental concept: {concept}"),
            ));
        }
    }

    if analysis.time_complexity.needs_optimization() {
        gaps.push(KnowledgeGap::new(
            OPTIMIZATION_CONCEPT,
            GapCategory::Performance,
            Severity::Medium,
            SUBOPTIMAL_COMPLEXITY_REASON,
        ));
    }

    if analysis.has_data_structure(DataStructureKind::Array)
        && !analysis.has_pattern(CodingPattern::TwoPointers)
    {
        gaps.push(KnowledgeGap::new(
            CodingPattern::TwoPointers.concept_id(),
            GapCategory::Pattern,
            Severity::Medium,
            TWO_POINTERS_REASON,
        ));
    }

    tracing::debug!(gaps = gaps.len(), "knowledge gaps identified");
    gaps
}

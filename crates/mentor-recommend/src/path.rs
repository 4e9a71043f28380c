//! Strengths and weaknesses over a learner's submission history.

use std::collections::BTreeMap;

use mentor_core::constants::{LEARNING_PATH_CONCEPTS, MAX_STRENGTHS, STRENGTH_MIN_SUBMISSIONS};
use mentor_core::types::ConceptSet;
use mentor_core::ConceptId;

use crate::graph::ConceptGraph;

/// Concepts used in at least two submissions, most frequent first, ties by id.
pub fn strengths(history: &[ConceptSet]) -> Vec<ConceptId> {
    let mut counts: BTreeMap<&ConceptId, usize> = BTreeMap::new();
    for concept in history.iter().flatten() {
        *counts.entry(concept).or_default() += 1;
    }
    let mut ranked: Vec<(&ConceptId, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= STRENGTH_MIN_SUBMISSIONS)
        .collect();
    // BTreeMap order is by id, and the sort is stable.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_STRENGTHS)
        .map(|(concept, _)| concept.clone())
        .collect()
}

/// Learning-path concepts absent from every submission and not mastered, in the
/// graph's study order. With no history every unmastered one is a weakness.
pub fn weaknesses(
    graph: &ConceptGraph,
    history: &[ConceptSet],
    mastered: &ConceptSet,
) -> Vec<ConceptId> {
    let missing = |id: &str| !mastered.contains(id) && !history.iter().any(|s| s.contains(id));
    let mut ordered: Vec<ConceptId> = graph
        .study_order()
        .into_iter()
        .filter(|id| LEARNING_PATH_CONCEPTS.contains(&id.as_str()) && missing(id.as_str()))
        .cloned()
        .collect();
    // Path concepts the graph does not know go last, in table order.
    for id in LEARNING_PATH_CONCEPTS {
        if !graph.contains(id) && missing(id) {
            ordered.push(ConceptId::from(id));
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::types::concept::concept_set;

    #[test]
    fn strengths_need_repeat_use() {
        let history = [
            concept_set(["array", "hash_table"]),
            concept_set(["array", "hash_table", "two_pointers"]),
            concept_set(["array"]),
        ];
        let strong = strengths(&history);
        let found: Vec<&str> = strong.iter().map(|c| c.as_str()).collect();
        assert_eq!(found, vec!["array", "hash_table"]);
    }

    #[test]
    fn strengths_are_capped() {
        let many = concept_set(["a", "b", "c", "d", "e", "f", "g"]);
        let history = [many.clone(), many];
        assert_eq!(strengths(&history).len(), MAX_STRENGTHS);
    }

    #[test]
    fn weaknesses_follow_study_order() {
        let graph = ConceptGraph::standard().unwrap();
        let history = [concept_set(["array"])];
        let found = weaknesses(&graph, &history, &concept_set(["hash_table"]));
        let ids: Vec<&str> = found.iter().map(|c| c.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"linked_list"));
        let position = |id: &str| ids.iter().position(|c| *c == id).unwrap();
        assert!(position("recursion") < position("dynamic_programming"));
    }
}

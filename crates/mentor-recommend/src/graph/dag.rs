//! Cycle detection over the prerequisite graph using Tarjan's SCC.

use std::collections::VecDeque;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::{FxHashMap, FxHashSet};

use super::node::ConceptNode;

/// Prerequisite graph: an edge runs from a prerequisite to the concept that needs it.
pub(crate) type PrerequisiteGraph = DiGraph<ConceptNode, ()>;

/// SCCs with more than one node, plus single nodes with a self edge.
pub(crate) fn find_cycles(graph: &PrerequisiteGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .collect()
}

/// Render one cycle inside `scc` as `a -> b -> a`, starting from the smallest id.
pub(crate) fn describe_cycle(graph: &PrerequisiteGraph, scc: &[NodeIndex]) -> String {
    let Some(&start) = scc.iter().min_by_key(|&&idx| graph[idx].id.as_str()) else {
        return String::new();
    };
    let members: FxHashSet<NodeIndex> = scc.iter().copied().collect();

    // BFS inside the component until some edge closes back on `start`.
    let mut parent: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    let mut queue = VecDeque::from([start]);
    let mut closing = start;
    'search: while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node) {
            if next == start {
                closing = node;
                break 'search;
            }
            if members.contains(&next) && !parent.contains_key(&next) {
                parent.insert(next, node);
                queue.push_back(next);
            }
        }
    }

    let mut interior = Vec::new();
    let mut cursor = closing;
    while cursor != start {
        interior.push(cursor);
        match parent.get(&cursor) {
            Some(&prev) => cursor = prev,
            None => break,
        }
    }

    std::iter::once(start)
        .chain(interior.into_iter().rev())
        .chain(std::iter::once(start))
        .map(|idx| graph[idx].id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

//! Static prerequisite graph over learning concepts.
//!
//! Nodes live in a petgraph `DiGraph` with an id index beside it. Construction validates
//! everything once; the graph is read-only afterwards and safe to share across threads.

mod dag;
pub mod node;
pub mod standard;

use mentor_core::errors::ConceptGraphError;
use mentor_core::types::FxHashMap;
use mentor_core::ConceptId;
use petgraph::algo::toposort;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

pub use node::ConceptNode;

use dag::PrerequisiteGraph;

/// Validated, acyclic concept graph.
#[derive(Debug, Clone)]
pub struct ConceptGraph {
    graph: PrerequisiteGraph,
    node_index: FxHashMap<ConceptId, NodeIndex>,
}

impl ConceptGraph {
    /// Build and validate a graph.
    ///
    /// Rejects duplicate ids, importance outside [0, 1], prerequisites that are not nodes,
    /// and prerequisite cycles.
    pub fn from_nodes(nodes: Vec<ConceptNode>) -> Result<Self, ConceptGraphError> {
        let mut graph = PrerequisiteGraph::with_capacity(nodes.len(), nodes.len() * 2);
        let mut node_index: FxHashMap<ConceptId, NodeIndex> = FxHashMap::default();

        for node in nodes {
            if !node.importance.is_finite() || !(0.0..=1.0).contains(&node.importance) {
                return Err(ConceptGraphError::InvalidImportance {
                    id: node.id.to_string(),
                    importance: node.importance,
                });
            }
            if node_index.contains_key(&node.id) {
                return Err(ConceptGraphError::DuplicateConcept {
                    id: node.id.to_string(),
                });
            }
            let id = node.id.clone();
            let idx = graph.add_node(node);
            node_index.insert(id, idx);
        }

        let mut edges = Vec::new();
        for target in graph.node_indices() {
            let node = &graph[target];
            for prerequisite in &node.prerequisites {
                let Some(&source) = node_index.get(prerequisite) else {
                    return Err(ConceptGraphError::UnknownPrerequisite {
                        concept: node.id.to_string(),
                        prerequisite: prerequisite.to_string(),
                    });
                };
                edges.push((source, target));
            }
        }
        for (source, target) in edges {
            graph.update_edge(source, target, ());
        }

        if let Some(scc) = dag::find_cycles(&graph).first() {
            return Err(ConceptGraphError::CycleDetected {
                path: dag::describe_cycle(&graph, scc),
            });
        }

        tracing::debug!(
            concepts = graph.node_count(),
            edges = graph.edge_count(),
            "concept graph validated"
        );
        Ok(Self { graph, node_index })
    }

    /// The built-in catalog of data structures, algorithms and patterns.
    pub fn standard() -> Result<Self, ConceptGraphError> {
        Self::from_nodes(standard::standard_concepts())
    }

    pub fn get(&self, id: &str) -> Option<&ConceptNode> {
        self.node_index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in insertion order.
    pub fn concepts(&self) -> impl Iterator<Item = &ConceptNode> {
        self.graph.node_weights()
    }

    /// Concepts that list `id` as a direct prerequisite.
    pub fn dependents(&self, id: &str) -> Vec<&ConceptId> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut ids: Vec<&ConceptId> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| &self.graph[n].id)
            .collect();
        ids.sort();
        ids
    }

    /// Every concept ordered so that prerequisites come before their dependents.
    pub fn study_order(&self) -> Vec<&ConceptId> {
        match toposort(&self.graph, None) {
            Ok(order) => order.into_iter().map(|idx| &self.graph[idx].id).collect(),
            // Unreachable for a graph that passed construction.
            Err(_) => Vec::new(),
        }
    }
}

//! Built-in concept catalog.

use mentor_core::SkillLevel::{Advanced, Beginner, Intermediate};

use super::node::ConceptNode;

/// Data structures, algorithms and patterns with their prerequisite edges.
///
/// `function_basics` and `sorting` are prerequisite-only leaves.
pub fn standard_concepts() -> Vec<ConceptNode> {
    vec![
        // Data structures
        ConceptNode::new("array", Beginner, 0.9)
            .leads_to(["dynamic_programming", "two_pointers", "sliding_window"])
            .with_base_minutes(60),
        ConceptNode::new("linked_list", Beginner, 0.8)
            .requires(["array"])
            .leads_to(["stack", "queue", "tree"])
            .with_base_minutes(90),
        ConceptNode::new("stack", Intermediate, 0.7)
            .requires(["linked_list"])
            .leads_to(["recursion", "backtracking"]),
        ConceptNode::new("queue", Intermediate, 0.7)
            .requires(["linked_list"])
            .leads_to(["bfs", "tree_traversal"]),
        ConceptNode::new("hash_table", Intermediate, 0.9)
            .requires(["array"])
            .leads_to(["two_sum", "caching", "memoization"])
            .with_base_minutes(120),
        ConceptNode::new("heap", Advanced, 0.8)
            .requires(["array", "tree"])
            .leads_to(["priority_queue", "dijkstra", "kth_element"]),
        ConceptNode::new("tree", Intermediate, 0.8)
            .requires(["linked_list", "recursion"])
            .leads_to(["bst", "trie", "segment_tree"]),
        ConceptNode::new("graph", Advanced, 0.9)
            .requires(["tree", "queue"])
            .leads_to(["dfs", "bfs", "shortest_path"]),
        // Algorithms
        ConceptNode::new("two_pointers", Intermediate, 0.8)
            .requires(["array"])
            .leads_to(["sliding_window", "merge_intervals"])
            .with_base_minutes(90),
        ConceptNode::new("sliding_window", Intermediate, 0.8)
            .requires(["two_pointers"])
            .leads_to(["substring_problems", "optimization"]),
        ConceptNode::new("binary_search", Intermediate, 0.9)
            .requires(["array", "recursion"])
            .leads_to(["search_optimization", "divide_and_conquer"])
            .with_base_minutes(120),
        ConceptNode::new("dynamic_programming", Advanced, 0.9)
            .requires(["recursion", "memoization"])
            .leads_to(["optimization_problems", "advanced_dp"])
            .with_base_minutes(300),
        ConceptNode::new("greedy", Intermediate, 0.7)
            .requires(["array", "sorting"])
            .leads_to(["optimization", "graph_algorithms"]),
        ConceptNode::new("backtracking", Advanced, 0.8)
            .requires(["recursion", "dfs"])
            .leads_to(["combinatorics", "constraint_satisfaction"]),
        ConceptNode::new("dfs", Intermediate, 0.8)
            .requires(["tree", "graph", "recursion"])
            .leads_to(["backtracking", "topological_sort"]),
        ConceptNode::new("bfs", Intermediate, 0.8)
            .requires(["tree", "graph", "queue"])
            .leads_to(["shortest_path", "level_order"]),
        // Patterns
        ConceptNode::new("recursion", Intermediate, 0.9)
            .requires(["function_basics"])
            .leads_to(["tree_problems", "dynamic_programming"])
            .with_base_minutes(180),
        ConceptNode::new("memoization", Intermediate, 0.8)
            .requires(["recursion", "hash_table"])
            .leads_to(["dynamic_programming", "optimization"]),
        // Prerequisite-only leaves
        ConceptNode::new("function_basics", Beginner, 0.7).leads_to(["recursion"]),
        ConceptNode::new("sorting", Beginner, 0.8).leads_to(["greedy", "binary_search"]),
    ]
}

//! Category tags produced by the Pattern Library.
//!
//! Each tag doubles as a concept id in the concept graph, so `as_str` values are the
//! shared vocabulary between the analyzer and the recommendation engine.

use std::fmt;

use mentor_core::ConceptId;
use serde::{Deserialize, Serialize};

macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $tag:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            pub fn concept_id(self) -> ConceptId {
                ConceptId::from(self.as_str())
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

category_enum! {
    /// Algorithm families.
    AlgorithmCategory {
        DynamicProgramming => "dynamic_programming",
        Greedy => "greedy",
        DivideAndConquer => "divide_and_conquer",
        Backtracking => "backtracking",
        SlidingWindow => "sliding_window",
        TreeTraversal => "tree_traversal",
        GraphAlgorithms => "graph_algorithms",
    }
}

category_enum! {
    /// Data structures.
    DataStructureKind {
        Array => "array",
        HashTable => "hash_table",
        LinkedList => "linked_list",
        Stack => "stack",
        Queue => "queue",
        Heap => "heap",
        Tree => "tree",
        Graph => "graph",
    }
}

category_enum! {
    /// Interview-style coding patterns. `Recursion` is only ever detected structurally.
    CodingPattern {
        TwoPointers => "two_pointers",
        SlidingWindow => "sliding_window",
        FastSlowPointers => "fast_slow_pointers",
        MergeIntervals => "merge_intervals",
        CyclicSort => "cyclic_sort",
        TreeDfs => "tree_dfs",
        TreeBfs => "tree_bfs",
        TopologicalSort => "topological_sort",
        BinarySearch => "binary_search",
        ModifiedBinarySearch => "modified_binary_search",
        Recursion => "recursion",
    }
}

//! Practice problem catalog.

use mentor_core::constants::DEFAULT_PROBLEM_MINUTES;
use mentor_core::SkillLevel::{self, Beginner, Intermediate};
use mentor_core::ConceptId;

use crate::types::{PracticeProblem, Priority};

/// Static practice problem. Difficulty uses the easy/medium/hard aliases of skill levels.
#[derive(Debug, Clone, Copy)]
pub struct CatalogProblem {
    pub title: &'static str,
    pub difficulty: SkillLevel,
    pub url: &'static str,
}

impl CatalogProblem {
    pub fn to_problem(&self, concept: &ConceptId, priority: Priority) -> PracticeProblem {
        PracticeProblem {
            concept: concept.clone(),
            title: self.title.to_string(),
            difficulty: self.difficulty,
            url: self.url.to_string(),
            estimated_minutes: DEFAULT_PROBLEM_MINUTES,
            priority,
        }
    }
}

const fn problem(title: &'static str, difficulty: SkillLevel, url: &'static str) -> CatalogProblem {
    CatalogProblem {
        title,
        difficulty,
        url,
    }
}

const ARRAY: &[CatalogProblem] = &[
    problem("Two Sum", Beginner, "https://leetcode.com/problems/two-sum/"),
    problem(
        "Best Time to Buy and Sell Stock",
        Beginner,
        "https://leetcode.com/problems/best-time-to-buy-and-sell-stock/",
    ),
];

const LINKED_LIST: &[CatalogProblem] = &[
    problem(
        "Reverse Linked List",
        Beginner,
        "https://leetcode.com/problems/reverse-linked-list/",
    ),
    problem(
        "Merge Two Sorted Lists",
        Beginner,
        "https://leetcode.com/problems/merge-two-sorted-lists/",
    ),
];

const DYNAMIC_PROGRAMMING: &[CatalogProblem] = &[
    problem(
        "Climbing Stairs",
        Beginner,
        "https://leetcode.com/problems/climbing-stairs/",
    ),
    problem(
        "House Robber",
        Intermediate,
        "https://leetcode.com/problems/house-robber/",
    ),
];

const TWO_POINTERS: &[CatalogProblem] = &[
    problem(
        "Valid Palindrome",
        Beginner,
        "https://leetcode.com/problems/valid-palindrome/",
    ),
    problem(
        "Container With Most Water",
        Intermediate,
        "https://leetcode.com/problems/container-with-most-water/",
    ),
];

const HASH_TABLE: &[CatalogProblem] = &[
    problem(
        "Valid Anagram",
        Beginner,
        "https://leetcode.com/problems/valid-anagram/",
    ),
    problem(
        "Group Anagrams",
        Intermediate,
        "https://leetcode.com/problems/group-anagrams/",
    ),
];

/// Catalog problems for `concept`, empty when the concept has none.
pub fn problems_for(concept: &str) -> &'static [CatalogProblem] {
    match concept {
        "array" => ARRAY,
        "linked_list" => LINKED_LIST,
        "dynamic_programming" => DYNAMIC_PROGRAMMING,
        "two_pointers" => TWO_POINTERS,
        "hash_table" => HASH_TABLE,
        _ => &[],
    }
}

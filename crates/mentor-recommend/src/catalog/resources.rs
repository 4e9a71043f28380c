//! Study resource catalog.

use mentor_core::SkillLevel::{self, Advanced, Beginner, Intermediate};

use crate::types::{Resource, ResourceKind};

/// Static resource entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogResource {
    pub title: &'static str,
    pub kind: ResourceKind,
    pub url: &'static str,
    pub difficulty: SkillLevel,
    pub estimated_minutes: u32,
}

impl CatalogResource {
    pub fn to_resource(&self) -> Resource {
        Resource {
            title: self.title.to_string(),
            kind: self.kind,
            url: self.url.to_string(),
            difficulty: self.difficulty,
            estimated_minutes: self.estimated_minutes,
        }
    }
}

const fn entry(
    title: &'static str,
    kind: ResourceKind,
    url: &'static str,
    difficulty: SkillLevel,
    estimated_minutes: u32,
) -> CatalogResource {
    CatalogResource {
        title,
        kind,
        url,
        difficulty,
        estimated_minutes,
    }
}

const ARRAY: &[CatalogResource] = &[
    entry(
        "Array Fundamentals",
        ResourceKind::Article,
        "https://example.com/array-fundamentals",
        Beginner,
        30,
    ),
    entry(
        "Two Sum Problem",
        ResourceKind::Problem,
        "https://leetcode.com/problems/two-sum/",
        Beginner,
        20,
    ),
];

const LINKED_LIST: &[CatalogResource] = &[
    entry(
        "Linked List Implementation",
        ResourceKind::Tutorial,
        "https://example.com/linked-list-tutorial",
        Beginner,
        45,
    ),
    entry(
        "Reverse Linked List",
        ResourceKind::Problem,
        "https://leetcode.com/problems/reverse-linked-list/",
        Beginner,
        25,
    ),
];

const DYNAMIC_PROGRAMMING: &[CatalogResource] = &[
    entry(
        "DP Patterns and Techniques",
        ResourceKind::Video,
        "https://example.com/dp-patterns",
        Advanced,
        120,
    ),
    entry(
        "Climbing Stairs",
        ResourceKind::Problem,
        "https://leetcode.com/problems/climbing-stairs/",
        Beginner,
        15,
    ),
];

const BINARY_SEARCH: &[CatalogResource] = &[
    entry(
        "Binary Search Template",
        ResourceKind::Article,
        "https://example.com/binary-search-template",
        Intermediate,
        40,
    ),
    entry(
        "Search Insert Position",
        ResourceKind::Problem,
        "https://leetcode.com/problems/search-insert-position/",
        Beginner,
        20,
    ),
];

/// Catalog entries for `concept`, empty when the concept has none.
pub fn resources_for(concept: &str) -> &'static [CatalogResource] {
    match concept {
        "array" => ARRAY,
        "linked_list" => LINKED_LIST,
        "dynamic_programming" => DYNAMIC_PROGRAMMING,
        "binary_search" => BINARY_SEARCH,
        _ => &[],
    }
}

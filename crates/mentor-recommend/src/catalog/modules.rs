//! Learning objectives and the per-level study tracks appended to every learning path.

use mentor_core::SkillLevel::{self, Advanced, Beginner, Intermediate};

const ARRAY_OBJECTIVES: &[&str] = &[
    "Understand array operations and indexing",
    "Learn to traverse arrays efficiently",
    "Master array manipulation techniques",
];

const LINKED_LIST_OBJECTIVES: &[&str] = &[
    "Understand linked list structure and operations",
    "Learn to traverse and manipulate linked lists",
    "Master two-pointer techniques for linked lists",
];

const DYNAMIC_PROGRAMMING_OBJECTIVES: &[&str] = &[
    "Understand the principle of optimal substructure",
    "Learn to identify overlapping subproblems",
    "Master memoization and tabulation techniques",
];

/// Objectives for `concept`; concepts without an entry get a single generic one.
pub fn objectives_for(concept: &str) -> Vec<String> {
    let listed = match concept {
        "array" => ARRAY_OBJECTIVES,
        "linked_list" => LINKED_LIST_OBJECTIVES,
        "dynamic_programming" => DYNAMIC_PROGRAMMING_OBJECTIVES,
        _ => return vec![format!("Master {}", concept.replace('_', " "))],
    };
    listed.iter().map(|o| o.to_string()).collect()
}

/// `linked_list` -> `Linked List`.
pub fn display_name(concept: &str) -> String {
    concept
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A study track that is not a graph concept.
#[derive(Debug, Clone, Copy)]
pub struct SkillTrack {
    pub concept: &'static str,
    pub title: &'static str,
    pub difficulty: SkillLevel,
    pub estimated_minutes: u32,
    pub objectives: &'static [&'static str],
}

const BEGINNER_TRACK: SkillTrack = SkillTrack {
    concept: "problem_solving_fundamentals",
    title: "Problem Solving Fundamentals",
    difficulty: Beginner,
    estimated_minutes: 120,
    objectives: &[
        "Understand problem-solving approach",
        "Learn to break down complex problems",
        "Practice basic algorithmic thinking",
    ],
};

const INTERMEDIATE_TRACK: SkillTrack = SkillTrack {
    concept: "algorithm_optimization",
    title: "Algorithm Optimization Techniques",
    difficulty: Intermediate,
    estimated_minutes: 180,
    objectives: &[
        "Learn to analyze time and space complexity",
        "Master optimization techniques",
        "Practice efficient algorithm design",
    ],
};

const ADVANCED_TRACK: SkillTrack = SkillTrack {
    concept: "advanced_algorithms",
    title: "Advanced Algorithm Design",
    difficulty: Advanced,
    estimated_minutes: 240,
    objectives: &[
        "Master complex algorithmic patterns",
        "Learn advanced optimization techniques",
        "Practice system design principles",
    ],
};

pub fn track_for(skill_level: SkillLevel) -> &'static SkillTrack {
    match skill_level {
        Beginner => &BEGINNER_TRACK,
        Intermediate => &INTERMEDIATE_TRACK,
        Advanced => &ADVANCED_TRACK,
    }
}

/// Practice difficulties for a learner: easy only for beginners, up to medium for
/// intermediates, medium and hard for advanced learners.
pub fn difficulty_progression(skill_level: SkillLevel) -> Vec<SkillLevel> {
    match skill_level {
        Beginner => vec![Beginner],
        Intermediate => vec![Beginner, Intermediate],
        Advanced => vec![Intermediate, Advanced],
    }
}

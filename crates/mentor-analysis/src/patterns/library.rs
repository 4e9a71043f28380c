//! Compiled Pattern Library: one `RegexSet` per category, built once per process.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use mentor_core::ComplexityClass;
use regex::{RegexSet, RegexSetBuilder};

use super::categories::{AlgorithmCategory, CodingPattern, DataStructureKind};
use super::signatures;

/// A compiled set of signatures; a category is present if any signature matches.
#[derive(Debug)]
pub struct SignatureSet {
    set: RegexSet,
}

impl SignatureSet {
    /// Compile case-insensitively. Returns `None` if any pattern is invalid.
    pub fn compile(patterns: &[&str]) -> Option<Self> {
        RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .build()
            .map(|set| Self { set })
            .map_err(|e| tracing::error!(error = %e, "invalid signature pattern"))
            .ok()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

fn compile_table<C: Copy>(table: &[(C, &[&str])]) -> Vec<(C, SignatureSet)> {
    table
        .iter()
        .filter_map(|(category, patterns)| {
            SignatureSet::compile(patterns).map(|set| (*category, set))
        })
        .collect()
}

fn first_hint(table: &[(ComplexityClass, SignatureSet)], text: &str) -> Option<ComplexityClass> {
    table
        .iter()
        .find(|(_, set)| set.is_match(text))
        .map(|(class, _)| *class)
}

/// Immutable, strongly-typed signature tables. Safe to share across threads.
#[derive(Debug)]
pub struct PatternLibrary {
    algorithms: Vec<(AlgorithmCategory, SignatureSet)>,
    data_structures: Vec<(DataStructureKind, SignatureSet)>,
    coding_patterns: Vec<(CodingPattern, SignatureSet)>,
    sort_or_heap: Option<SignatureSet>,
    containers: Option<SignatureSet>,
    time_hints: Vec<(ComplexityClass, SignatureSet)>,
    space_hints: Vec<(ComplexityClass, SignatureSet)>,
}

static GLOBAL: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::build);

impl PatternLibrary {
    /// The process-wide library.
    pub fn global() -> &'static PatternLibrary {
        &GLOBAL
    }

    fn build() -> Self {
        let library = Self {
            algorithms: compile_table(signatures::ALGORITHM_SIGNATURES),
            data_structures: compile_table(signatures::DATA_STRUCTURE_SIGNATURES),
            coding_patterns: compile_table(signatures::CODING_PATTERN_SIGNATURES),
            sort_or_heap: SignatureSet::compile(signatures::SORT_OR_HEAP_SIGNATURES),
            containers: SignatureSet::compile(signatures::CONTAINER_SIGNATURES),
            time_hints: compile_table(signatures::TIME_HINTS),
            space_hints: compile_table(signatures::SPACE_HINTS),
        };
        tracing::info!(
            algorithms = library.algorithms.len(),
            data_structures = library.data_structures.len(),
            coding_patterns = library.coding_patterns.len(),
            "pattern library compiled"
        );
        library
    }

    pub fn detect_algorithms(&self, text: &str) -> BTreeSet<AlgorithmCategory> {
        self.algorithms
            .iter()
            .filter(|(_, set)| set.is_match(text))
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn detect_data_structures(&self, text: &str) -> BTreeSet<DataStructureKind> {
        self.data_structures
            .iter()
            .filter(|(_, set)| set.is_match(text))
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn detect_coding_patterns(&self, text: &str) -> BTreeSet<CodingPattern> {
        self.coding_patterns
            .iter()
            .filter(|(_, set)| set.is_match(text))
            .map(|(pattern, _)| *pattern)
            .collect()
    }

    pub fn has_sort_or_heap(&self, text: &str) -> bool {
        self.sort_or_heap.as_ref().is_some_and(|s| s.is_match(text))
    }

    pub fn has_container_construction(&self, text: &str) -> bool {
        self.containers.as_ref().is_some_and(|s| s.is_match(text))
    }

    /// First matching time hint in priority order, or the `O(n)` default.
    pub fn hinted_time_complexity(&self, text: &str) -> ComplexityClass {
        first_hint(&self.time_hints, text).unwrap_or(signatures::DEFAULT_FALLBACK_TIME)
    }

    /// First matching space hint in priority order, or the `O(1)` default.
    pub fn hinted_space_complexity(&self, text: &str) -> ComplexityClass {
        first_hint(&self.space_hints, text).unwrap_or(signatures::DEFAULT_FALLBACK_SPACE)
    }
}

//! Analyzer output types.

use std::collections::BTreeSet;

use mentor_core::types::ConceptSet;
use mentor_core::ComplexityClass;
use serde::{Deserialize, Serialize};

use crate::patterns::{AlgorithmCategory, CodingPattern, DataStructureKind};

/// Which detection path produced the structural counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPath {
    /// Counts come from a syntax tree.
    Structural,
    /// Structural counts are zero; only text signatures were used.
    TextSignature,
}

/// Complete analysis of one submission. Produced once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeAnalysisResult {
    /// Declared language tag, as supplied by the caller.
    pub language: String,
    pub analysis_path: AnalysisPath,
    pub lines_of_code: u32,
    pub function_count: u32,
    pub loop_count: u32,
    pub conditional_count: u32,
    pub exception_handler_count: u32,
    pub cyclomatic_complexity: u32,
    /// Maximum loop-nesting depth.
    pub max_nesting_depth: u32,
    pub patterns: BTreeSet<CodingPattern>,
    pub algorithms: BTreeSet<AlgorithmCategory>,
    pub data_structures: BTreeSet<DataStructureKind>,
    pub time_complexity: ComplexityClass,
    pub space_complexity: ComplexityClass,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub complexity_score: f64,
    pub quality_score: f64,
}

impl CodeAnalysisResult {
    /// Union of data structure, algorithm and pattern tags as concept ids.
    pub fn detected_concepts(&self) -> ConceptSet {
        self.data_structures
            .iter()
            .map(|d| d.concept_id())
            .chain(self.algorithms.iter().map(|a| a.concept_id()))
            .chain(self.patterns.iter().map(|p| p.concept_id()))
            .collect()
    }

    pub fn has_data_structure(&self, kind: DataStructureKind) -> bool {
        self.data_structures.contains(&kind)
    }

    pub fn has_pattern(&self, pattern: CodingPattern) -> bool {
        self.patterns.contains(&pattern)
    }
}

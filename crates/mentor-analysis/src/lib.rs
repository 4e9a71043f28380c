//! # mentor-analysis
//!
//! Static Code Analyzer and Pattern Library.
//!
//! Source text plus a declared language tag goes in; a [`CodeAnalysisResult`] comes out.
//! Supported languages get a tree-sitter structural pass; everything else, and any
//! source that fails to parse cleanly, is analyzed from text signatures alone.

pub mod analyzer;
pub mod complexity;
pub mod language;
pub mod parsing;
pub mod patterns;
pub mod scoring;
pub mod structural;
pub mod suggestions;
pub mod types;

pub use analyzer::{StaticAnalyzer, Submission};
pub use language::Language;
pub use patterns::{AlgorithmCategory, CodingPattern, DataStructureKind, PatternLibrary};
pub use types::{AnalysisPath, CodeAnalysisResult};

/// Analyze with default thresholds.
pub fn analyze(source: &str, language: &str) -> CodeAnalysisResult {
    StaticAnalyzer::default().analyze(source, language)
}

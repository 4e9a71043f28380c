//! Deterministic improvement hints derived from an analysis.

use mentor_core::ComplexityClass;

use crate::patterns::DataStructureKind;
use crate::types::CodeAnalysisResult;

pub const OPTIMIZE_POLYNOMIAL: &str =
    "Consider optimizing to O(n log n) using sorting or O(n) using hash table";
pub const OPTIMIZE_EXPONENTIAL: &str = "Consider using dynamic programming or greedy approach";
pub const USE_HASH_LOOKUP: &str = "Consider using hash table for O(1) lookups";
pub const SPLIT_LONG_FUNCTIONS: &str = "Split long functions into smaller, focused helpers";
pub const FLATTEN_NESTING: &str = "Reduce nesting with early returns or guard clauses";

/// Suggestions in a fixed order. `long_functions` and `deep_nesting` mirror the
/// structural issues already recorded on `result`.
pub fn suggest(result: &CodeAnalysisResult, long_functions: bool, deep_nesting: bool) -> Vec<String> {
    let mut out = Vec::new();
    match result.time_complexity {
        ComplexityClass::ON2 | ComplexityClass::ONk(_) => out.push(OPTIMIZE_POLYNOMIAL),
        ComplexityClass::O2N => out.push(OPTIMIZE_EXPONENTIAL),
        _ => {}
    }
    if result.time_complexity >= ComplexityClass::ON2
        && result.has_data_structure(DataStructureKind::Array)
        && !result.has_data_structure(DataStructureKind::HashTable)
    {
        out.push(USE_HASH_LOOKUP);
    }
    if long_functions {
        out.push(SPLIT_LONG_FUNCTIONS);
    }
    if deep_nesting {
        out.push(FLATTEN_NESTING);
    }
    out.into_iter().map(String::from).collect()
}

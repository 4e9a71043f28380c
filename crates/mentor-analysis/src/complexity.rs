//! Time and space complexity estimation.

use mentor_core::ComplexityClass;

use crate::patterns::PatternLibrary;
use crate::structural::StructuralMetrics;

/// Estimate from the syntax tree: loop depth drives time, containers or recursion
/// drive space.
pub fn estimate_structural(
    metrics: &StructuralMetrics,
    source: &str,
    library: &PatternLibrary,
) -> (ComplexityClass, ComplexityClass) {
    let time = ComplexityClass::from_loop_depth(
        metrics.max_loop_depth,
        library.has_sort_or_heap(source),
    );
    let space = if library.has_container_construction(source) || metrics.has_recursion() {
        ComplexityClass::ON
    } else {
        ComplexityClass::O1
    };
    (time, space)
}

/// Estimate from textual hints only.
pub fn estimate_textual(
    source: &str,
    library: &PatternLibrary,
) -> (ComplexityClass, ComplexityClass) {
    (
        library.hinted_time_complexity(source),
        library.hinted_space_complexity(source),
    )
}

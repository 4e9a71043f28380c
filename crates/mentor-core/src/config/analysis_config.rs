//! Static analyzer configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds for structural issue detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Functions longer than this many lines are flagged. Default: 50.
    pub long_function_lines: Option<u32>,
    /// Conditional nesting deeper than this is flagged. Default: 4.
    pub max_conditional_nesting: Option<u32>,
}

impl AnalysisConfig {
    pub fn effective_long_function_lines(&self) -> u32 {
        self.long_function_lines
            .unwrap_or(constants::LONG_FUNCTION_LINES)
    }

    pub fn effective_max_conditional_nesting(&self) -> u32 {
        self.max_conditional_nesting
            .unwrap_or(constants::MAX_CONDITIONAL_NESTING)
    }

    /// Overwrite fields that are set in `other`.
    pub(crate) fn merge(&mut self, other: &AnalysisConfig) {
        if other.long_function_lines.is_some() {
            self.long_function_lines = other.long_function_lines;
        }
        if other.max_conditional_nesting.is_some() {
            self.max_conditional_nesting = other.max_conditional_nesting;
        }
    }
}

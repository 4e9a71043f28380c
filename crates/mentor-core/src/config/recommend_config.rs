//! Recommendation engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Limits applied while synthesizing recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RecommendConfig {
    /// Recommendations kept after ranking. Default: 5.
    pub max_recommendations: Option<usize>,
    /// Resources attached per recommendation. Default: 2.
    pub max_resources_per_concept: Option<usize>,
    /// Practice problems per recommendation set. Default: 8.
    pub max_practice_problems: Option<usize>,
    /// Base study minutes for concepts without a catalog entry. Default: 120.
    pub default_base_minutes: Option<u32>,
    /// Recent submissions forming the concept history window. Default: 10.
    pub recent_history_window: Option<usize>,
}

impl RecommendConfig {
    pub fn effective_max_recommendations(&self) -> usize {
        self.max_recommendations
            .unwrap_or(constants::MAX_RECOMMENDATIONS)
    }

    pub fn effective_max_resources_per_concept(&self) -> usize {
        self.max_resources_per_concept
            .unwrap_or(constants::MAX_RESOURCES_PER_CONCEPT)
    }

    pub fn effective_max_practice_problems(&self) -> usize {
        self.max_practice_problems
            .unwrap_or(constants::MAX_PRACTICE_PROBLEMS)
    }

    pub fn effective_default_base_minutes(&self) -> u32 {
        self.default_base_minutes
            .unwrap_or(constants::DEFAULT_BASE_MINUTES)
    }

    pub fn effective_recent_history_window(&self) -> usize {
        self.recent_history_window
            .unwrap_or(constants::RECENT_HISTORY_WINDOW)
    }

    pub(crate) fn merge(&mut self, other: &RecommendConfig) {
        if other.max_recommendations.is_some() {
            self.max_recommendations = other.max_recommendations;
        }
        if other.max_resources_per_concept.is_some() {
            self.max_resources_per_concept = other.max_resources_per_concept;
        }
        if other.max_practice_problems.is_some() {
            self.max_practice_problems = other.max_practice_problems;
        }
        if other.default_base_minutes.is_some() {
            self.default_base_minutes = other.default_base_minutes;
        }
        if other.recent_history_window.is_some() {
            self.recent_history_window = other.recent_history_window;
        }
    }
}

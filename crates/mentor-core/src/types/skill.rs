//! Skill levels and concept difficulty share one ordinal scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// `beginner < intermediate < advanced`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Concept and resource difficulty use the learner scale.
pub type Difficulty = SkillLevel;

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Study-time multiplier applied to a concept's base time.
    pub fn time_multiplier(self) -> f64 {
        match self {
            Self::Beginner => 1.5,
            Self::Intermediate => 1.0,
            Self::Advanced => 0.7,
        }
    }

    /// True when `difficulty` is at most one level above this learner level.
    pub fn can_tackle(self, difficulty: Difficulty) -> bool {
        difficulty.ordinal() <= self.ordinal() + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = ValidationError;

    /// Accepts the learner tags plus the easy/medium/hard problem scale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Ok(Self::Beginner),
            "intermediate" | "medium" => Ok(Self::Intermediate),
            "advanced" | "hard" => Ok(Self::Advanced),
            _ => Err(ValidationError::UnknownSkillLevel(s.to_string())),
        }
    }
}

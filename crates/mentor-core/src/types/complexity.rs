//! Asymptotic complexity classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed ordered enumeration of complexity classes.
///
/// `ONk` carries the polynomial degree (always > 2). The derived ordering follows
/// declaration order, so every `O(n^k)` sorts between `O(n^2)` and `O(2^n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ComplexityClass {
    #[default]
    O1,
    OLogN,
    ON,
    ONLogN,
    ON2,
    ONk(u32),
    O2N,
}

impl ComplexityClass {
    /// Time class for a maximum loop-nesting depth.
    pub fn from_loop_depth(depth: u32, sort_or_heap: bool) -> Self {
        match depth {
            0 => Self::O1,
            1 if sort_or_heap => Self::ONLogN,
            1 => Self::ON,
            2 => Self::ON2,
            k => Self::ONk(k),
        }
    }

    /// Quadratic or worse, excluding higher polynomials.
    pub fn needs_optimization(self) -> bool {
        matches!(self, Self::ON2 | Self::O2N)
    }

    pub fn label(self) -> String {
        match self {
            Self::O1 => "O(1)".to_string(),
            Self::OLogN => "O(log n)".to_string(),
            Self::ON => "O(n)".to_string(),
            Self::ONLogN => "O(n log n)".to_string(),
            Self::ON2 => "O(n^2)".to_string(),
            Self::ONk(k) => format!("O(n^{k})"),
            Self::O2N => "O(2^n)".to_string(),
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Error returned when a complexity label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized complexity class: {0}")]
pub struct ParseComplexityError(pub String);

impl FromStr for ComplexityClass {
    type Err = ParseComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "O(1)" => Ok(Self::O1),
            "O(logn)" => Ok(Self::OLogN),
            "O(n)" => Ok(Self::ON),
            "O(nlogn)" => Ok(Self::ONLogN),
            "O(n^2)" => Ok(Self::ON2),
            "O(2^n)" => Ok(Self::O2N),
            other => other
                .strip_prefix("O(n^")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|k| k.parse::<u32>().ok())
                .filter(|k| *k > 2)
                .map(Self::ONk)
                .ok_or_else(|| ParseComplexityError(s.to_string())),
        }
    }
}

impl Serialize for ComplexityClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for ComplexityClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

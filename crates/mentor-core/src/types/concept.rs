//! Concept identifiers.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A concept tag such as `hash_table` or `memoization`.
///
/// Concept ids cross the service boundary as plain strings (mastered sets, history
/// windows), so the id is a string newtype. Pattern Library categories convert into
/// it through their `concept_id()` accessors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(String);

impl ConceptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ConceptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ConceptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConceptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered set of concepts; ordering keeps serialized output deterministic.
pub type ConceptSet = BTreeSet<ConceptId>;

/// Build a concept set from string tags.
pub fn concept_set<I, S>(ids: I) -> ConceptSet
where
    I: IntoIterator<Item = S>,
    S: Into<ConceptId>,
{
    ids.into_iter().map(Into::into).collect()
}

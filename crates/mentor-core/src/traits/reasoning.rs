//! Optional narrative enrichment from an external reasoning service.
//!
//! The deterministic result is always produced first and is never touched by the
//! service. Enrichment is additive: an absent narrative is an expected state.

use serde::{Deserialize, Serialize};

use crate::errors::ReasoningError;

/// Free-text commentary layered on top of a core result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl Narrative {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: Vec::new(),
        }
    }
}

/// A hosted language model or any other source of narrative explanation.
pub trait ReasoningService: Send + Sync {
    /// Explain `payload` (the serialized core result) under the given subject,
    /// e.g. `"code_analysis"` or `"recommendations"`.
    fn narrate(&self, subject: &str, payload: &serde_json::Value)
        -> Result<Narrative, ReasoningError>;
}

/// Reasoner used when no service is configured.
pub struct NoOpReasoner;

impl ReasoningService for NoOpReasoner {
    fn narrate(
        &self,
        _subject: &str,
        _payload: &serde_json::Value,
    ) -> Result<Narrative, ReasoningError> {
        Err(ReasoningError::Unavailable)
    }
}

/// Two-tier result: the required core output plus optional enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enriched<T> {
    pub core: T,
    pub enrichment: Option<Narrative>,
}

impl<T> Enriched<T> {
    pub fn bare(core: T) -> Self {
        Self {
            core,
            enrichment: None,
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.enrichment.is_some()
    }
}

/// Attach a narrative to `core` if the service produces one.
/// Failures are logged and leave `enrichment` empty.
pub fn enrich<T: Serialize>(
    core: T,
    subject: &str,
    service: &dyn ReasoningService,
) -> Enriched<T> {
    let payload = match serde_json::to_value(&core) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(subject, error = %e, "could not serialize result for enrichment");
            return Enriched::bare(core);
        }
    };

    match service.narrate(subject, &payload) {
        Ok(narrative) => Enriched {
            core,
            enrichment: Some(narrative),
        },
        Err(ReasoningError::Unavailable) => {
            tracing::debug!(subject, "reasoning service unavailable, returning core result");
            Enriched::bare(core)
        }
        Err(e) => {
            tracing::warn!(subject, error = %e, "reasoning service failed, returning core result");
            Enriched::bare(core)
        }
    }
}

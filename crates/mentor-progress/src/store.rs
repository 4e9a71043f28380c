//! Metric history collaborator.
//!
//! Analytics never hold history themselves; callers pass a store (or a snapshot taken
//! from one) into every computation.

use std::sync::RwLock;

use mentor_core::errors::ValidationError;
use rustc_hash::FxHashMap;

use crate::sample::ProgressMetricSample;

/// Append-only metric history, ordered by `recorded_at` per learner and metric.
pub trait MetricHistoryStore: Send + Sync {
    /// Rejects a sample recorded before the latest one in its learner/metric series.
    fn append(&self, sample: ProgressMetricSample) -> Result<(), ValidationError>;

    /// One metric series for a learner, oldest first.
    fn history(&self, learner_id: &str, metric_name: &str) -> Vec<ProgressMetricSample>;

    /// Every sample for a learner across metrics, oldest first.
    fn learner_history(&self, learner_id: &str) -> Vec<ProgressMetricSample>;

    /// Known learner ids, sorted.
    fn learners(&self) -> Vec<String>;
}

type SeriesMap = FxHashMap<String, FxHashMap<String, Vec<ProgressMetricSample>>>;

/// In-memory store for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryMetricHistoryStore {
    series: RwLock<SeriesMap>,
}

impl InMemoryMetricHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every sample, stopping at the first rejection.
    pub fn extend<I>(&self, samples: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = ProgressMetricSample>,
    {
        samples.into_iter().try_for_each(|s| self.append(s))
    }

    pub fn len(&self) -> usize {
        self.read()
            .values()
            .flat_map(|metrics| metrics.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Appends are single pushes, so a poisoned lock still guards consistent data.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, SeriesMap> {
        self.series.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SeriesMap> {
        self.series.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl MetricHistoryStore for InMemoryMetricHistoryStore {
    fn append(&self, sample: ProgressMetricSample) -> Result<(), ValidationError> {
        let mut series = self.write();
        let entries = series
            .entry(sample.learner_id().to_string())
            .or_default()
            .entry(sample.metric_name().to_string())
            .or_default();
        if let Some(last) = entries.last() {
            if sample.recorded_at() < last.recorded_at() {
                tracing::warn!(
                    learner_id = sample.learner_id(),
                    metric = sample.metric_name(),
                    "rejected out-of-order sample"
                );
                return Err(ValidationError::OutOfOrder {
                    learner_id: sample.learner_id().to_string(),
                    metric: sample.metric_name().to_string(),
                });
            }
        }
        entries.push(sample);
        Ok(())
    }

    fn history(&self, learner_id: &str, metric_name: &str) -> Vec<ProgressMetricSample> {
        self.read()
            .get(learner_id)
            .and_then(|metrics| metrics.get(metric_name))
            .cloned()
            .unwrap_or_default()
    }

    fn learner_history(&self, learner_id: &str) -> Vec<ProgressMetricSample> {
        let mut all: Vec<ProgressMetricSample> = self
            .read()
            .get(learner_id)
            .map(|metrics| metrics.values().flatten().cloned().collect())
            .unwrap_or_default();
        // Stable on equal timestamps, then by metric name so the order is deterministic.
        all.sort_by(|a, b| {
            a.recorded_at()
                .cmp(&b.recorded_at())
                .then_with(|| a.metric_name().cmp(b.metric_name()))
        });
        all
    }

    fn learners(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}

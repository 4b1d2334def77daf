//! Interaction logging and analytics.

pub mod metrics;
pub mod store;

pub use metrics::aggregate;
pub use store::{InteractionStore, JsonlStore, MemoryStore, StoreError};

use chrono::{DateTime, Utc};
use gogo_common::{AggregateMetrics, InteractionLog};
use std::sync::Arc;

/// Records interactions into an injected store and derives metrics from it.
#[derive(Clone)]
pub struct Monitor {
    store: Arc<dyn InteractionStore>,
}

impl Monitor {
    pub fn new(store: Arc<dyn InteractionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn record(&self, log: InteractionLog) -> Result<(), StoreError> {
        self.store.append(&log)
    }

    /// Metrics over the last `window_days` days, ending now.
    pub fn metrics(&self, window_days: u32) -> Result<AggregateMetrics, StoreError> {
        self.metrics_at(window_days, Utc::now())
    }

    pub fn metrics_at(
        &self,
        window_days: u32,
        now: DateTime<Utc>,
    ) -> Result<AggregateMetrics, StoreError> {
        let logs = self.store.load()?;
        Ok(aggregate(&logs, window_days, now))
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<InteractionLog>, StoreError> {
        let mut logs = self.store.load()?;
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs.truncate(limit);
        Ok(logs)
    }
}

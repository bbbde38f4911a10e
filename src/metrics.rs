// src/metrics.rs
use crate::types::{ActionRecord, SimStats};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Where actors report action outcomes. The load-generation harness
/// implements this to feed its own aggregation pipeline.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    async fn record(&self, record: ActionRecord);
}

/// In-memory sink aggregating counts and latencies. Stands in for a harness
/// collector in tests and demos.
#[derive(Clone, Default)]
pub struct StatsCollector {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    total_actions: u64,
    successes: u64,
    actions_by_kind: HashMap<String, u64>,
    failures_by_category: HashMap<String, u64>,
    total_latency_ms: u128,
    records: Vec<ActionRecord>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the aggregate counters.
    pub async fn snapshot(&self) -> SimStats {
        let inner = self.inner.read().await;

        let mut stats = SimStats {
            total_actions: inner.total_actions,
            total_failures: inner.total_actions - inner.successes,
            actions_by_kind: inner.actions_by_kind.clone(),
            failures_by_category: inner.failures_by_category.clone(),
            success_rate: 0.0,
            average_latency_ms: 0.0,
        };

        if inner.total_actions > 0 {
            stats.success_rate = (inner.successes as f64 / inner.total_actions as f64) * 100.0;
            stats.average_latency_ms =
                inner.total_latency_ms as f64 / inner.total_actions as f64;
        }

        stats
    }

    /// Every record seen so far, in arrival order.
    pub async fn records(&self) -> Vec<ActionRecord> {
        self.inner.read().await.records.clone()
    }

    pub async fn action_count(&self) -> u64 {
        self.inner.read().await.total_actions
    }
}

#[async_trait]
impl MetricsSink for StatsCollector {
    async fn record(&self, record: ActionRecord) {
        let mut inner = self.inner.write().await;

        inner.total_actions += 1;
        if record.success {
            inner.successes += 1;
        }

        *inner
            .actions_by_kind
            .entry(record.action.to_string())
            .or_insert(0) += 1;

        if let Some(category) = record.error_category {
            *inner
                .failures_by_category
                .entry(category.to_string())
                .or_insert(0) += 1;
        }

        inner.total_latency_ms += record.latency.as_millis();
        inner.records.push(record);
    }
}

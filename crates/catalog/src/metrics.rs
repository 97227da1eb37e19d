use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

#[derive(Debug, Default)]
struct InnerMetrics {
    pages_served: AtomicU64,
    items_returned: AtomicU64,
    strategy_rejections: AtomicU64,
    store_failures: AtomicU64,
}

#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<InnerMetrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub pages_served: u64,
    pub items_returned: u64,
    pub strategy_rejections: u64,
    pub store_failures: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Metrics {
            inner: Arc::new(InnerMetrics::default()),
        }
    }

    pub fn record_page(&self, items: u64) {
        self.inner.pages_served.fetch_add(1, Ordering::Relaxed);
        self.inner.items_returned.fetch_add(items, Ordering::Relaxed);
    }

    pub fn increment_rejections(&self) {
        self.inner
            .strategy_rejections
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_failures(&self) {
        self.inner.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            pages_served: self.inner.pages_served.load(Ordering::Relaxed),
            items_returned: self.inner.items_returned.load(Ordering::Relaxed),
            strategy_rejections: self.inner.strategy_rejections.load(Ordering::Relaxed),
            store_failures: self.inner.store_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

//! Factory cache statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing how metadata requests were served.
#[derive(Debug, Default)]
pub struct FactoryStats {
    hits: AtomicU64,
    misses: AtomicU64,
    resolved: AtomicU64,
}

impl FactoryStats {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Requests served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Requests that triggered a resolution pass.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Classes resolved through the driver and cached.
    pub fn resolved(&self) -> u64 {
        self.resolved.load(Ordering::Relaxed)
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

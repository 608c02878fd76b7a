//! Counters for eviction statistics.
//

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Counters for eviction statistics.
#[derive(Default)]
pub struct Counters {
    pub runs_total: AtomicU64,
    pub failures_total: AtomicU64,
    pub evicted_items: AtomicU64,
    /// Unix millis of the last successful run, 0 before the first one.
    pub last_finished_at: AtomicI64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub runs_total: u64,
    pub failures_total: u64,
    pub evicted_items: u64,
    pub last_finished_at: i64,
}

impl Counters {
    /// Creates a new counters instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, items: usize, finished_at: i64) {
        self.runs_total.fetch_add(1, Ordering::Relaxed);
        self.evicted_items.fetch_add(items as u64, Ordering::Relaxed);
        self.last_finished_at.store(finished_at, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.runs_total.fetch_add(1, Ordering::Relaxed);
        self.failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            runs_total: self.runs_total.load(Ordering::Relaxed),
            failures_total: self.failures_total.load(Ordering::Relaxed),
            evicted_items: self.evicted_items.load(Ordering::Relaxed),
            last_finished_at: self.last_finished_at.load(Ordering::Relaxed),
        }
    }
}

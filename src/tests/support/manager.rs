// Instrumented cache manager for scheduling tests.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::cache::{CacheError, CacheManager, CacheStore};

/// One observed clear call.
#[derive(Debug, Clone)]
pub struct Run {
    pub region: String,
    pub started: Instant,
    pub finished: Instant,
    pub result: Result<usize, CacheError>,
}

/// Wraps a store, recording every clear and flagging overlapping calls.
pub struct RecordingManager {
    store: Arc<CacheStore>,
    work: Duration,
    fail_next: AtomicUsize,
    in_flight: AtomicBool,
    overlapped: AtomicBool,
    runs: Mutex<Vec<Run>>,
}

impl RecordingManager {
    pub fn new(store: Arc<CacheStore>) -> Self {
        Self {
            store,
            work: Duration::ZERO,
            fail_next: AtomicUsize::new(0),
            in_flight: AtomicBool::new(false),
            overlapped: AtomicBool::new(false),
            runs: Mutex::new(Vec::new()),
        }
    }

    /// Blocks each clear for `work` of wall-clock time.
    pub fn with_work(mut self, work: Duration) -> Self {
        self.work = work;
        self
    }

    /// Makes the next `n` clears fail as if the store were unreachable.
    pub fn failing_next(self, n: usize) -> Self {
        self.fail_next.store(n, Ordering::SeqCst);
        self
    }

    pub fn runs(&self) -> Vec<Run> {
        self.runs.lock().clone()
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().len()
    }

    pub fn overlapped(&self) -> bool {
        self.overlapped.load(Ordering::SeqCst)
    }
}

impl CacheManager for RecordingManager {
    fn clear(&self, region: &str) -> Result<usize, CacheError> {
        let started = Instant::now();
        if self.in_flight.swap(true, Ordering::SeqCst) {
            self.overlapped.store(true, Ordering::SeqCst);
        }

        if !self.work.is_zero() {
            std::thread::sleep(self.work);
        }

        let fail = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        let result = if fail {
            Err(CacheError::Unavailable {
                region: region.to_string(),
                reason: "connection refused".to_string(),
            })
        } else {
            self.store.clear(region)
        };

        self.in_flight.store(false, Ordering::SeqCst);
        self.runs.lock().push(Run {
            region: region.to_string(),
            started,
            finished: Instant::now(),
            result: result.clone(),
        });
        result
    }
}

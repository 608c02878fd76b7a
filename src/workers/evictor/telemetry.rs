// Package evictor provides telemetry for eviction.

use crate::cache::CacheError;
use crate::metrics::meter;
use crate::workers::evictor::counters::Counters;

/// Records a completed clear and emits the completion trace line.
pub fn log_success(name: &str, region: &str, counters: &Counters, items: usize) {
    let finished_at = chrono::Utc::now().timestamp_millis();
    counters.record_success(items, finished_at);
    meter::add_eviction(region, items, finished_at);

    tracing::trace!(
        name = %name,
        component = "evictor",
        region = %region,
        evicted_items = items,
        "cache region cleared"
    );
}

/// Records a failed clear. Reporting the error itself is left to the caller.
pub fn log_failure(name: &str, counters: &Counters, err: &CacheError) {
    counters.record_failure();
    meter::add_eviction_failure(err.region());

    tracing::debug!(
        name = %name,
        component = "evictor",
        region = %err.region(),
        failures_total = counters.failures_total.load(std::sync::atomic::Ordering::Relaxed),
        "eviction attempt failed"
    );
}

// Metric name constants
pub const EVICTIONS_TOTAL: &str = "feed_cache_evictions_total";
pub const EVICTION_FAILURES_TOTAL: &str = "feed_cache_eviction_failures_total";
pub const EVICTED_ITEMS_TOTAL: &str = "feed_cache_evicted_items_total";
pub const EVICTION_LAST_FINISHED_AT: &str = "feed_cache_eviction_last_finished_at_ms";

pub const EVENTS_DEAD_LETTERED_TOTAL: &str = "events_dead_lettered_total";
pub const EVENTS_MALFORMED_TOTAL: &str = "events_malformed_total";

const REGION_LABEL: &str = "region";

/// Records a completed eviction tick.
pub fn add_eviction(region: &str, items: usize, finished_at_ms: i64) {
    metrics::counter!(EVICTIONS_TOTAL, REGION_LABEL => region.to_string()).increment(1);
    metrics::counter!(EVICTED_ITEMS_TOTAL, REGION_LABEL => region.to_string())
        .increment(items as u64);
    metrics::gauge!(EVICTION_LAST_FINISHED_AT, REGION_LABEL => region.to_string())
        .set(finished_at_ms as f64);
}

/// Records a failed eviction tick.
pub fn add_eviction_failure(region: &str) {
    metrics::counter!(EVICTION_FAILURES_TOTAL, REGION_LABEL => region.to_string()).increment(1);
}

/// Adds dead-lettered events.
pub fn add_dead_lettered(value: u64) {
    metrics::counter!(EVENTS_DEAD_LETTERED_TOTAL).increment(value);
}

/// Adds event bodies rejected before processing.
pub fn add_malformed(value: u64) {
    metrics::counter!(EVENTS_MALFORMED_TOTAL).increment(value);
}

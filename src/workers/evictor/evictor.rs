//! Eviction worker functionality.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info, warn};

use crate::cache::{CacheError, CacheManager, FEED_DISCOVERY_CACHE};
use crate::workers::WorkerConfig;

use super::counters::{Counters, Stats};
use super::telemetry;

pub const SVC_EVICTOR: &str = "feed-discovery-evictor";

/// Periodically clears the feed discovery cache as a whole.
///
/// Runs as a single task on a fixed-delay schedule: the delay is counted from
/// the end of one clear to the start of the next, so clears never overlap and
/// a slow clear stretches the effective period.
pub struct Evictor {
    shutdown_ctx: CancellationToken,
    name: String,
    region: String,
    cfg: WorkerConfig,
    manager: Arc<dyn CacheManager>,
    counters: Arc<Counters>,
    inited: AtomicBool,
}

impl Evictor {
    /// Creates a new evictor bound to the feed discovery region.
    pub fn new(
        ctx: CancellationToken,
        cfg: WorkerConfig,
        manager: Arc<dyn CacheManager>,
    ) -> Arc<Self> {
        Arc::new(Self {
            shutdown_ctx: ctx,
            name: SVC_EVICTOR.to_string(),
            region: FEED_DISCOVERY_CACHE.to_string(),
            cfg,
            manager,
            counters: Arc::new(Counters::new()),
            inited: AtomicBool::new(false),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the region this evictor clears.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn config(&self) -> &WorkerConfig {
        &self.cfg
    }

    pub fn stats(&self) -> Stats {
        self.counters.snapshot()
    }

    /// Clears every entry of the feed discovery region.
    pub fn clear_cache(&self) -> Result<usize, CacheError> {
        match self.manager.clear(&self.region) {
            Ok(items) => {
                telemetry::log_success(&self.name, &self.region, &self.counters, items);
                Ok(items)
            }
            Err(err) => {
                telemetry::log_failure(&self.name, &self.counters, &err);
                Err(err)
            }
        }
    }

    /// Spawns the scheduling loop on the given tracker.
    ///
    /// Returns `None` when eviction is disabled or the loop is already running.
    pub fn serve(self: &Arc<Self>, tracker: &TaskTracker) -> Option<JoinHandle<()>> {
        if !self.cfg.is_enabled() {
            warn!(name = %self.name, region = %self.region, "eviction disabled, worker not started");
            return None;
        }

        if self
            .inited
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            warn!(name = %self.name, "already serving, nothing to start");
            return None;
        }

        let evictor = Arc::clone(self);
        Some(tracker.spawn(async move {
            evictor.loop_handler().await;
        }))
    }

    /// Main loop: sleep, clear, repeat until shutdown.
    async fn loop_handler(self: Arc<Self>) {
        let schedule = self.cfg.schedule();
        info!(
            name = %self.name,
            region = %self.region,
            initial_delay = ?schedule.initial_delay(),
            fixed_delay = ?schedule.delay(),
            "worker upped"
        );

        let mut wait = schedule.initial_delay();
        loop {
            tokio::select! {
                biased;
                _ = self.shutdown_ctx.cancelled() => {
                    info!(name = %self.name, "worker is gone");
                    return;
                }
                _ = tokio::time::sleep(wait) => {}
            }

            // A failed tick is reported and the schedule carries on.
            if let Err(err) = self.clear_cache() {
                error!(
                    name = %self.name,
                    component = "evictor",
                    region = %err.region(),
                    error = %err,
                    "scheduled eviction failed"
                );
            }

            wait = schedule.delay();
        }
    }
}

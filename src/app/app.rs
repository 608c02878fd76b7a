// Main application implementation.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::cache::{self, CacheStore, FeedDiscoveryRegion, FEED_DISCOVERY_CACHE};
use crate::config::{Config, ConfigTrait};
use crate::shutdown::GracefulShutdown;
use crate::workers::{Evictor, WorkerConfig};

/// Encapsulates the application state: the region store, the typed feed
/// discovery handle and its evictor.
pub struct App {
    cfg: Config,
    store: Arc<CacheStore>,
    feed_discovery: Arc<FeedDiscoveryRegion>,
    evictor: Arc<Evictor>,
    shutdown: GracefulShutdown,
}

impl App {
    /// Creates a new application instance with a fresh store holding the
    /// feed discovery region.
    pub fn new(shutdown: GracefulShutdown, cfg: Config) -> Result<Self> {
        let (store, feed_discovery) = cache::new_feed_store()?;
        Self::with_store(shutdown, cfg, store, feed_discovery)
    }

    /// Creates a new application instance over a prepared store.
    ///
    /// `feed_discovery` must be the region registered in `store` under the
    /// feed discovery name; anything else is a configuration error and the
    /// application refuses to start.
    pub fn with_store(
        shutdown: GracefulShutdown,
        cfg: Config,
        store: Arc<CacheStore>,
        feed_discovery: Arc<FeedDiscoveryRegion>,
    ) -> Result<Self> {
        let Some(registered) = store.region(FEED_DISCOVERY_CACHE) else {
            anyhow::bail!(
                "cache region {:?} is not registered (registered: {:?})",
                FEED_DISCOVERY_CACHE,
                store.names()
            );
        };
        if Arc::as_ptr(&registered) as *const () != Arc::as_ptr(&feed_discovery) as *const () {
            anyhow::bail!(
                "cache region {:?} is registered with a different instance",
                FEED_DISCOVERY_CACHE
            );
        }

        let evictor = Evictor::new(
            shutdown.token().clone(),
            WorkerConfig::eviction(&cfg),
            store.clone(),
        );

        Ok(Self {
            cfg,
            store,
            feed_discovery,
            evictor,
            shutdown,
        })
    }

    /// Starts background workers on the shutdown tracker.
    pub fn serve(&self) {
        if self.evictor.serve(self.shutdown.tracker()).is_none() && self.cfg.is_eviction_enabled() {
            warn!(
                component = "app",
                scope = %self.evictor.name(),
                event = "not_started",
                "evictor was already running"
            );
        }

        info!(
            component = "app",
            event = "started",
            regions = ?self.store.names(),
            "application lifecycle"
        );
    }

    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    /// Typed handle the discovery component reads and writes results through.
    pub fn feed_discovery(&self) -> &Arc<FeedDiscoveryRegion> {
        &self.feed_discovery
    }

    pub fn evictor(&self) -> &Arc<Evictor> {
        &self.evictor
    }

    /// Waits for a shutdown signal, then for background workers to stop.
    pub async fn await_shutdown(&self) -> Result<()> {
        let result = self.shutdown.await_shutdown().await;
        info!(component = "app", event = "stopped", "application lifecycle");
        result
    }
}

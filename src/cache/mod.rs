//! Named cache regions and the registry the evictor clears them through.

pub mod error;
pub mod region;
pub mod store;


// Re-export main types
pub use error::CacheError;
pub use region::{Cache, MapRegion, Region};
pub use store::{CacheManager, CacheStore};

use std::sync::Arc;

/// Region holding feed discovery results. Evicted as a whole on every tick.
pub const FEED_DISCOVERY_CACHE: &str = "feedDiscoveryCache";

/// Discovery request key (the site address as requested) to the discovery
/// result computed for it.
pub type FeedDiscoveryRegion = MapRegion<String, serde_json::Value>;

/// Creates a store with the feed discovery region registered.
pub fn new_feed_store() -> Result<(Arc<CacheStore>, Arc<FeedDiscoveryRegion>), CacheError> {
    let store = Arc::new(CacheStore::new());
    let feed: Arc<FeedDiscoveryRegion> = MapRegion::shared(FEED_DISCOVERY_CACHE);
    store.register(feed.clone())?;
    Ok((store, feed))
}

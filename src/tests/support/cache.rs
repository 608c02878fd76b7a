// Cache store fixtures for tests.

use std::sync::Arc;

use serde_json::json;

use crate::cache::{Cache, CacheStore, FeedDiscoveryRegion, MapRegion, FEED_DISCOVERY_CACHE};

pub type FeedRegion = FeedDiscoveryRegion;
pub type OtherRegion = MapRegion<String, u32>;

/// Store with the feed discovery region and one unrelated region registered.
pub fn feed_store() -> (Arc<CacheStore>, Arc<FeedRegion>, Arc<OtherRegion>) {
    let store = Arc::new(CacheStore::new());
    let feed: Arc<FeedRegion> = MapRegion::shared(FEED_DISCOVERY_CACHE);
    let other: Arc<OtherRegion> = MapRegion::shared("otherCache");
    store
        .register(feed.clone())
        .expect("register feed discovery region");
    store.register(other.clone()).expect("register other region");
    (store, feed, other)
}

/// Puts `n` discovery results into the feed region.
pub fn fill(feed: &FeedRegion, n: usize) {
    for i in 0..n {
        feed.put(
            format!("https://site-{i}.example.org/"),
            json!({ "feeds": [format!("https://site-{i}.example.org/feed.xml")] }),
        );
    }
}

/// Puts `n` unrelated entries into the other region.
pub fn fill_other(other: &OtherRegion, n: usize) {
    for i in 0..n {
        other.put(format!("k{i}"), i as u32);
    }
}

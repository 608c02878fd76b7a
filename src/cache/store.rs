//! Registry of named cache regions.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::{CacheError, Region};

/// Bulk-clear access to named regions.
pub trait CacheManager: Send + Sync {
    /// Removes every entry of the named region, returning how many were removed.
    fn clear(&self, region: &str) -> Result<usize, CacheError>;
}

/// Process-wide set of regions, keyed by name.
#[derive(Default)]
pub struct CacheStore {
    regions: RwLock<HashMap<String, Arc<dyn Region>>>,
}

impl CacheStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region under its own name. Names are unique.
    pub fn register(&self, region: Arc<dyn Region>) -> Result<(), CacheError> {
        let name = region.name().to_string();
        let mut regions = self.regions.write();
        if regions.contains_key(&name) {
            return Err(CacheError::DuplicateRegion(name));
        }
        debug!(component = "cache-store", event = "region_registered", region = %name, "region registered");
        regions.insert(name, region);
        Ok(())
    }

    /// Looks up a region by name.
    pub fn region(&self, name: &str) -> Option<Arc<dyn Region>> {
        self.regions.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.regions.read().contains_key(name)
    }

    /// Registered region names in lexical order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl CacheManager for CacheStore {
    fn clear(&self, region: &str) -> Result<usize, CacheError> {
        // Release the registry lock before touching entries.
        let target = self
            .region(region)
            .ok_or_else(|| CacheError::UnknownRegion(region.to_string()))?;
        target.clear_all()
    }
}

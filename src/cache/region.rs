//! Cache region abstraction and its in-memory implementation.

use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::CacheError;

/// Type-erased view of a named region. This is all the evictor and the
/// store registry need to know about a region.
pub trait Region: Send + Sync {
    fn name(&self) -> &str;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry, returning how many were removed.
    fn clear_all(&self) -> Result<usize, CacheError>;
}

/// Typed access to a region for the components that populate and read it.
pub trait Cache<K, V>: Region {
    fn get(&self, key: &K) -> Option<Arc<V>>;
    fn put(&self, key: K, value: V);
}

/// Sharded in-memory region.
///
/// Values are stored behind `Arc`, so a reader holding a value keeps the whole
/// value alive across a concurrent clear and never sees a partial one.
pub struct MapRegion<K, V> {
    name: String,
    entries: DashMap<K, Arc<V>>,
}

impl<K, V> MapRegion<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty region.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: DashMap::new(),
        }
    }

    /// Creates an empty region already wrapped for sharing.
    pub fn shared(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name))
    }
}

impl<K, V> Region for MapRegion<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear_all(&self) -> Result<usize, CacheError> {
        let mut removed = 0usize;
        self.entries.retain(|_, _| {
            removed += 1;
            false
        });
        Ok(removed)
    }
}

impl<K, V> Cache<K, V> for MapRegion<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn put(&self, key: K, value: V) {
        self.entries.insert(key, Arc::new(value));
    }
}

impl<K, V> fmt::Debug for MapRegion<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapRegion")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .finish()
    }
}

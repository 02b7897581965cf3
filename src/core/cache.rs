//! In-memory memoization of computed standings.
//!
//! Standings are a pure function of the snapshot, so they are cached under a
//! fingerprint of the snapshot contents. A snapshot with different data gets
//! a different key; entries for stale snapshots age out of the LRU or can be
//! dropped with [`StandingsCache::invalidate`].

use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::league::snapshot::LeagueSnapshot;
use crate::scoring::standings::{compute_standings, Standings};

/// Snapshots remembered by [`StandingsCache::default`]
pub const DEFAULT_CAPACITY: usize = 8;

/// Cache key derived from snapshot contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotKey(pub u64);

impl SnapshotKey {
    pub fn of(snapshot: &LeagueSnapshot) -> Self {
        Self(snapshot.fingerprint())
    }
}

/// LRU cache of standings, shareable across threads.
///
/// Cloning the cache shares the underlying storage.
#[derive(Clone)]
pub struct StandingsCache {
    memory_cache: Arc<Mutex<LruCache<SnapshotKey, Standings>>>,
    memory_capacity: usize,
}

impl StandingsCache {
    /// Create a cache holding at most `memory_capacity` standings (minimum 1).
    pub fn new(memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            memory_capacity: capacity.get(),
        }
    }

    // Standings are only ever inserted whole, so a poisoned lock still
    // guards a consistent cache.
    fn lock(&self) -> MutexGuard<'_, LruCache<SnapshotKey, Standings>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &SnapshotKey) -> Option<Standings> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: SnapshotKey, standings: Standings) {
        self.lock().put(key, standings);
    }

    /// Return the cached standings for `snapshot`, computing them on a miss.
    pub fn get_or_compute(&self, snapshot: &LeagueSnapshot) -> Standings {
        let key = SnapshotKey::of(snapshot);

        if let Some(standings) = self.get(&key) {
            tracing::debug!(key = key.0, "standings cache hit");
            return standings;
        }

        tracing::debug!(key = key.0, "standings cache miss");
        let standings = compute_standings(snapshot);
        self.put(key, standings.clone());
        standings
    }

    /// Drop the entry for one snapshot. Returns whether it was cached.
    pub fn invalidate(&self, key: &SnapshotKey) -> bool {
        self.lock().pop(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// (entries, capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.lock().len(), self.memory_capacity)
    }
}

impl Default for StandingsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

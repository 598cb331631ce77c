//! Time-limited cache for loaded word pools
//!
//! Entries remember when they were inserted; callers pass the current time in,
//! so freshness is fully deterministic in tests.

use chrono::{DateTime, TimeDelta, Utc};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A cached value and the moment it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub inserted_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// True while `now` is less than `ttl` past insertion
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.inserted_at) < ttl
    }
}

/// Keyed cache with a single time-to-live
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    ttl: TimeDelta,
    entries: FxHashMap<K, CacheEntry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            entries: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Store `value`, replacing any previous entry
    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: now,
            },
        );
    }

    /// The value under `key` if it is still fresh
    pub fn get_fresh(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| &entry.value)
    }

    /// The entry under `key`, fresh or not
    pub fn entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn is_fresh(&self, key: &K, now: DateTime<Utc>) -> bool {
        self.get_fresh(key, now).is_some()
    }

    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// All entries, fresh or stale
    pub fn iter(&self) -> impl Iterator<Item = (&K, &CacheEntry<V>)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

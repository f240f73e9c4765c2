//! Bounded, least-recently-used cache of event records.
//!
//! The cache sits in front of the authoritative [`EventStore`] and hands out
//! [`CacheEntry`] wrappers around the store's shared records. Lookups that
//! hit only touch the cache table; misses serialize on the store-wide
//! coordination lock and re-check the table before loading, so two callers
//! racing on the same miss always end up with the same entry.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use lru::LruCache;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::debug;

use ticketbooth_core::clock::Clock;
use ticketbooth_core::error::DomainError;
use ticketbooth_core::record::{EventId, EventRecord, SharedRecord};
use ticketbooth_core::store::EventStore;

/// Store-wide coordination lock.
///
/// Held for writing while the cache populates from the store and while new
/// events are written; held for reading while the store is listed.
pub type StoreLock = Arc<RwLock<()>>;

/// One cached event plus its last-access timestamp.
#[derive(Debug)]
pub struct CacheEntry {
    record: SharedRecord,
    last_access_micros: AtomicI64,
}

impl CacheEntry {
    fn new(record: SharedRecord, now: DateTime<Utc>) -> Self {
        Self {
            record,
            last_access_micros: AtomicI64::new(now.timestamp_micros()),
        }
    }

    /// Acquires the event's exclusive lock.
    ///
    /// This is the same lock the store holds, so it stays shared with any
    /// later entry created for the same event after an eviction.
    pub async fn lock(&self) -> MutexGuard<'_, EventRecord> {
        self.record.lock().await
    }

    /// The shared record this entry wraps.
    #[must_use]
    pub fn record(&self) -> &SharedRecord {
        &self.record
    }

    /// When this entry was last handed out.
    #[must_use]
    pub fn last_access(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_micros(self.last_access_micros.load(Ordering::SeqCst))
            .unwrap_or_default()
    }

    fn touch(&self, now: DateTime<Utc>) {
        self.last_access_micros
            .store(now.timestamp_micros(), Ordering::SeqCst);
    }
}

/// Recency-evicting cache of event records with a fixed capacity.
pub struct EventCache {
    entries: Mutex<LruCache<EventId, Arc<CacheEntry>>>,
    capacity: NonZeroUsize,
    store: Arc<dyn EventStore>,
    store_lock: StoreLock,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for EventCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCache")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl EventCache {
    /// Creates an empty cache over `store`.
    ///
    /// `store_lock` must be the same lock every writer of `store` takes.
    #[must_use]
    pub fn new(
        store: Arc<dyn EventStore>,
        store_lock: StoreLock,
        clock: Arc<dyn Clock>,
        capacity: NonZeroUsize,
    ) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
            store,
            store_lock,
            clock,
        }
    }

    /// Returns the cache entry for `event_id`, loading it from the store on
    /// a miss. Returns `None` if the store has no such event.
    ///
    /// # Errors
    ///
    /// Propagates any error from the store lookup.
    pub async fn get_event(
        &self,
        event_id: &EventId,
    ) -> Result<Option<Arc<CacheEntry>>, DomainError> {
        if let Some(entry) = self.probe(event_id).await {
            debug!(event_id = %event_id, "cache hit");
            return Ok(Some(entry));
        }

        let _guard = self.store_lock.write().await;

        // Another caller may have populated the entry while we waited.
        if let Some(entry) = self.probe(event_id).await {
            debug!(event_id = %event_id, "cache populated concurrently");
            return Ok(Some(entry));
        }

        debug!(event_id = %event_id, "cache miss, loading from store");
        let Some(record) = self.store.get(event_id).await? else {
            return Ok(None);
        };
        Ok(Some(self.insert(event_id.clone(), record).await))
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns `true` if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Returns `true` if `event_id` is cached. Does not refresh recency.
    pub async fn contains(&self, event_id: &EventId) -> bool {
        self.entries.lock().await.contains(event_id)
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    async fn probe(&self, event_id: &EventId) -> Option<Arc<CacheEntry>> {
        let mut entries = self.entries.lock().await;
        let entry = entries.get(event_id)?;
        entry.touch(self.clock.now());
        Some(Arc::clone(entry))
    }

    async fn insert(&self, event_id: EventId, record: SharedRecord) -> Arc<CacheEntry> {
        let entry = Arc::new(CacheEntry::new(record, self.clock.now()));
        let mut entries = self.entries.lock().await;
        // Callers hold the store lock and have re-probed, so `push` can only
        // displace the least recently used entry, never this key.
        if let Some((victim, _)) = entries.push(event_id, Arc::clone(&entry)) {
            debug!(event_id = %victim, "evicted least recently used entry");
        }
        entry
    }
}

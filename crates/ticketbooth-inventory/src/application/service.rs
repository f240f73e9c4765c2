//! The inventory service and its injected collaborators.

use std::num::NonZeroUsize;
use std::sync::Arc;

use ticketbooth_core::clock::Clock;
use ticketbooth_core::id::IdGenerator;
use ticketbooth_core::ledger::TicketLedger;
use ticketbooth_core::store::EventStore;

use crate::domain::cache::{EventCache, StoreLock};

/// Orchestrates event creation, listing, and booking.
///
/// One instance is shared by every inbound request. Booking serializes only
/// on the booked event's own lock; the store-wide lock is reserved for
/// creation, listing, and cache population.
pub struct InventoryService {
    pub(crate) store: Arc<dyn EventStore>,
    pub(crate) store_lock: StoreLock,
    pub(crate) cache: EventCache,
    pub(crate) ledger: Arc<dyn TicketLedger>,
    pub(crate) ids: Arc<dyn IdGenerator>,
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl InventoryService {
    /// Wires a service over the given store and ledger with a cache holding
    /// at most `cache_capacity` events.
    #[must_use]
    pub fn new(
        store: Arc<dyn EventStore>,
        ledger: Arc<dyn TicketLedger>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        let store_lock = StoreLock::default();
        let cache = EventCache::new(
            Arc::clone(&store),
            Arc::clone(&store_lock),
            clock,
            cache_capacity,
        );
        Self {
            store,
            store_lock,
            cache,
            ledger,
            ids,
        }
    }

    /// The cache that mediates booking reads.
    #[must_use]
    pub fn cache(&self) -> &EventCache {
        &self.cache
    }
}

//! Shared application state.

use std::num::NonZeroUsize;
use std::sync::Arc;

use ticketbooth_core::clock::{Clock, SystemClock};
use ticketbooth_core::id::{IdGenerator, UuidGenerator};
use ticketbooth_inventory::application::InventoryService;
use ticketbooth_store::{InMemoryEventStore, InMemoryTicketLedger};

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one inventory service every request goes through.
    pub inventory: Arc<InventoryService>,
}

impl AppState {
    /// Wraps an already constructed service.
    #[must_use]
    pub fn new(inventory: Arc<InventoryService>) -> Self {
        Self { inventory }
    }

    /// Builds state over fresh in-memory collaborators.
    #[must_use]
    pub fn in_memory(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        Self::new(Arc::new(InventoryService::new(
            Arc::new(InMemoryEventStore::new()),
            Arc::new(InMemoryTicketLedger::new()),
            ids,
            clock,
            cache_capacity,
        )))
    }

    /// Production wiring: system clock and random UUIDs.
    #[must_use]
    pub fn production(cache_capacity: NonZeroUsize) -> Self {
        Self::in_memory(Arc::new(SystemClock), Arc::new(UuidGenerator), cache_capacity)
    }
}

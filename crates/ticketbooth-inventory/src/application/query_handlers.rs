//! Query handlers for the inventory context.
//!
//! Queries read the authoritative store directly and return owned copies of
//! the records, so callers never hold an event lock.

use ticketbooth_core::error::DomainError;
use ticketbooth_core::record::{EventId, EventRecord, TicketId};
use tracing::{info, warn};

use crate::application::service::InventoryService;

impl InventoryService {
    /// Lists every well-formed event in the store, in no particular order.
    ///
    /// The store is read under the store-wide lock, so any event whose
    /// creation has returned is included. Malformed records are logged and
    /// skipped rather than failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the store cannot be read.
    pub async fn list_events(&self) -> Result<Vec<EventRecord>, DomainError> {
        let snapshot = {
            let _guard = self.store_lock.read().await;
            self.store.snapshot().await?
        };

        let mut events = Vec::with_capacity(snapshot.len());
        for (key, shared) in snapshot {
            let record = shared.lock().await.clone();
            match record.validate_for(&key) {
                Ok(()) => events.push(record),
                Err(err) => warn!(event_id = %key, error = %err, "skipping invalid event"),
            }
        }

        info!(count = events.len(), "listing events");
        Ok(events)
    }

    /// Returns a copy of one event as currently stored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no such event exists, or
    /// `DomainError::Infrastructure` if the store fails or the stored record
    /// is malformed.
    pub async fn event_by_id(&self, event_id: &EventId) -> Result<EventRecord, DomainError> {
        let shared = self
            .store
            .get(event_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(event_id.clone()))?;
        let record = shared.lock().await.clone();
        record.validate_for(event_id)?;
        Ok(record)
    }

    /// Returns the event a ticket was issued for, if it was issued at all.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the ledger cannot be read.
    pub async fn ticket_owner(&self, ticket_id: &TicketId) -> Result<Option<EventId>, DomainError> {
        self.ledger.event_for(ticket_id).await
    }
}

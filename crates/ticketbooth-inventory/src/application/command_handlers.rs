//! Command handlers for the inventory context.
//!
//! Creation writes straight to the store under the store-wide lock. Booking
//! resolves the event through the cache and then works entirely under that
//! event's own lock: check, generate ticket ids, record them, decrement.

use ticketbooth_core::command::Command;
use ticketbooth_core::error::DomainError;
use ticketbooth_core::record::{EventId, EventRecord, TicketId, share};
use tracing::{info, warn};

use crate::application::service::InventoryService;
use crate::domain::commands::{BookTickets, CreateEvent};

impl InventoryService {
    /// Handles the `CreateEvent` command: assigns a fresh id and stores the
    /// event with every ticket available.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GenerationFailure` if no id can be generated,
    /// or `DomainError::Infrastructure` if the store rejects the write.
    pub async fn create_event(&self, command: &CreateEvent) -> Result<EventRecord, DomainError> {
        let event_id = EventId::new(self.ids.next_id()?);
        let record = EventRecord::new(
            event_id.clone(),
            command.name.clone(),
            command.date,
            command.total_tickets,
        );

        {
            let _guard = self.store_lock.write().await;
            self.store.put(event_id, share(record.clone())).await?;
        }

        info!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %record.id,
            total_tickets = record.total_tickets,
            "created event"
        );
        Ok(record)
    }

    /// Handles the `BookTickets` command.
    ///
    /// Either every requested ticket is issued or nothing changes: a failed
    /// call leaves the remaining count and the ticket ledger untouched.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidArgument` if `count` is zero.
    /// - `DomainError::NotFound` if the event does not exist.
    /// - `DomainError::InsufficientInventory` if fewer than `count` remain.
    /// - `DomainError::GenerationFailure` if ticket ids cannot be generated.
    /// - `DomainError::Infrastructure` if the store or ledger fails.
    pub async fn book_tickets(&self, command: &BookTickets) -> Result<Vec<TicketId>, DomainError> {
        if command.count == 0 {
            return Err(DomainError::InvalidArgument(
                "ticket count must be positive".into(),
            ));
        }

        let entry = self
            .cache
            .get_event(&command.event_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(command.event_id.clone()))?;

        let mut record = entry.lock().await;

        if record.available_tickets < command.count {
            warn!(
                correlation_id = %command.correlation_id(),
                event_id = %command.event_id,
                requested = command.count,
                available = record.available_tickets,
                "not enough tickets available"
            );
            return Err(DomainError::InsufficientInventory {
                event_id: command.event_id.clone(),
                requested: command.count,
                available: record.available_tickets,
            });
        }

        let tickets = (0..command.count)
            .map(|_| self.ids.next_id().map(TicketId::new))
            .collect::<Result<Vec<_>, _>>()?;

        // The ledger write is the last fallible step; the decrement after it
        // cannot fail, so no partial booking is ever observable.
        self.ledger.record(&tickets, &command.event_id).await?;
        record.available_tickets -= command.count;

        info!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_id = %command.event_id,
            event_name = %record.name,
            booked = command.count,
            remaining = record.available_tickets,
            "booked tickets"
        );
        Ok(tickets)
    }
}

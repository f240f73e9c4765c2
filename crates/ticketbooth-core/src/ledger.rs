//! Ticket ledger abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::record::{EventId, TicketId};

/// Append-only association of issued tickets to the event they belong to.
#[async_trait]
pub trait TicketLedger: Send + Sync {
    /// Records every ticket in `tickets` against `event_id`.
    ///
    /// All-or-nothing: if any ticket id was already issued, nothing is
    /// recorded and `DomainError::GenerationFailure` is returned.
    async fn record(&self, tickets: &[TicketId], event_id: &EventId) -> Result<(), DomainError>;

    /// Returns the event a ticket was booked against.
    async fn event_for(&self, ticket_id: &TicketId) -> Result<Option<EventId>, DomainError>;

    /// Total number of tickets issued.
    async fn len(&self) -> Result<usize, DomainError>;

    /// Returns `true` if no ticket has been issued yet.
    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}

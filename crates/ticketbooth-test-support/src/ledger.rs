//! Test ticket ledgers.

use async_trait::async_trait;
use ticketbooth_core::error::DomainError;
use ticketbooth_core::ledger::TicketLedger;
use ticketbooth_core::record::{EventId, TicketId};

/// A ledger that rejects every write and reports itself empty.
#[derive(Debug)]
pub struct FailingTicketLedger;

#[async_trait]
impl TicketLedger for FailingTicketLedger {
    async fn record(&self, _tickets: &[TicketId], _event_id: &EventId) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("ledger unavailable".into()))
    }

    async fn event_for(&self, _ticket_id: &TicketId) -> Result<Option<EventId>, DomainError> {
        Ok(None)
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(0)
    }
}

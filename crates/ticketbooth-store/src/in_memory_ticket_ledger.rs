//! In-memory implementation of the `TicketLedger` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use ticketbooth_core::error::DomainError;
use ticketbooth_core::ledger::TicketLedger;
use ticketbooth_core::record::{EventId, TicketId};

/// Hash-map backed ticket ledger keyed by ticket id.
#[derive(Debug, Default)]
pub struct InMemoryTicketLedger {
    tickets: RwLock<HashMap<TicketId, EventId>>,
}

impl InMemoryTicketLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketLedger for InMemoryTicketLedger {
    async fn record(&self, tickets: &[TicketId], event_id: &EventId) -> Result<(), DomainError> {
        let mut ledger = self.tickets.write().await;

        // Reject the whole batch before inserting anything.
        for (index, ticket) in tickets.iter().enumerate() {
            if ledger.contains_key(ticket) || tickets[..index].contains(ticket) {
                return Err(DomainError::GenerationFailure(format!(
                    "ticket id {ticket} was already issued"
                )));
            }
        }

        for ticket in tickets {
            debug!(ticket_id = %ticket, event_id = %event_id, "storing ticket");
            ledger.insert(ticket.clone(), event_id.clone());
        }
        Ok(())
    }

    async fn event_for(&self, ticket_id: &TicketId) -> Result<Option<EventId>, DomainError> {
        Ok(self.tickets.read().await.get(ticket_id).cloned())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.tickets.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_associates_each_ticket_with_event() {
        // Arrange
        let ledger = InMemoryTicketLedger::new();
        let event_id = EventId::from("evt-1");
        let tickets = vec![TicketId::from("t-1"), TicketId::from("t-2")];

        // Act
        ledger.record(&tickets, &event_id).await.unwrap();

        // Assert
        assert_eq!(ledger.len().await.unwrap(), 2);
        assert_eq!(
            ledger.event_for(&TicketId::from("t-2")).await.unwrap(),
            Some(event_id)
        );
    }

    #[tokio::test]
    async fn test_record_rejects_reissued_ticket_without_partial_write() {
        // Arrange
        let ledger = InMemoryTicketLedger::new();
        ledger
            .record(&[TicketId::from("t-1")], &EventId::from("evt-1"))
            .await
            .unwrap();

        // Act
        let result = ledger
            .record(
                &[TicketId::from("t-2"), TicketId::from("t-1")],
                &EventId::from("evt-2"),
            )
            .await;

        // Assert
        assert!(matches!(result, Err(DomainError::GenerationFailure(_))));
        assert_eq!(ledger.len().await.unwrap(), 1);
        assert!(
            ledger
                .event_for(&TicketId::from("t-2"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_record_rejects_duplicates_within_one_batch() {
        let ledger = InMemoryTicketLedger::new();

        let result = ledger
            .record(
                &[TicketId::from("t-1"), TicketId::from("t-1")],
                &EventId::from("evt-1"),
            )
            .await;

        assert!(matches!(result, Err(DomainError::GenerationFailure(_))));
        assert!(ledger.is_empty().await.unwrap());
    }
}

//! In-memory implementation of the `EventStore` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ticketbooth_core::error::DomainError;
use ticketbooth_core::record::{EventId, SharedRecord};
use ticketbooth_core::store::EventStore;

/// Hash-map backed event store.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    records: RwLock<HashMap<EventId, SharedRecord>>,
}

impl InMemoryEventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn get(&self, event_id: &EventId) -> Result<Option<SharedRecord>, DomainError> {
        Ok(self.records.read().await.get(event_id).cloned())
    }

    async fn put(&self, event_id: EventId, record: SharedRecord) -> Result<(), DomainError> {
        self.records.write().await.insert(event_id, record);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<(EventId, SharedRecord)>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .map(|(id, record)| (id.clone(), SharedRecord::clone(record)))
            .collect())
    }
}

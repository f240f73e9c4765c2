//! Authoritative event store abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::record::{EventId, SharedRecord};

/// Concurrency-safe mapping from event id to the shared event record.
///
/// The store is the source of truth; the inventory cache only ever holds
/// references to records that also live here.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Looks up the record stored under `event_id`.
    async fn get(&self, event_id: &EventId) -> Result<Option<SharedRecord>, DomainError>;

    /// Stores `record` under `event_id`, replacing any previous entry.
    async fn put(&self, event_id: EventId, record: SharedRecord) -> Result<(), DomainError>;

    /// Returns every `(key, record)` pair at a single point in time.
    /// Order is unspecified.
    async fn snapshot(&self) -> Result<Vec<(EventId, SharedRecord)>, DomainError>;
}

//! Test event stores — mock `EventStore` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use ticketbooth_core::error::DomainError;
use ticketbooth_core::record::{EventId, SharedRecord};
use ticketbooth_core::store::EventStore;
use ticketbooth_store::InMemoryEventStore;

/// An in-memory store that counts `get` calls and can delay them, to make
/// cache-population races observable.
#[derive(Debug, Default)]
pub struct RecordingEventStore {
    inner: InMemoryEventStore,
    gets: AtomicUsize,
    get_delay: Option<Duration>,
}

impl RecordingEventStore {
    /// Creates an empty store with no artificial latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose `get` sleeps for `delay` before answering.
    #[must_use]
    pub fn with_get_delay(delay: Duration) -> Self {
        Self {
            get_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Number of `get` calls served so far.
    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventStore for RecordingEventStore {
    async fn get(&self, event_id: &EventId) -> Result<Option<SharedRecord>, DomainError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.get_delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.get(event_id).await
    }

    async fn put(&self, event_id: EventId, record: SharedRecord) -> Result<(), DomainError> {
        self.inner.put(event_id, record).await
    }

    async fn snapshot(&self) -> Result<Vec<(EventId, SharedRecord)>, DomainError> {
        self.inner.snapshot().await
    }
}

/// An event store that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingEventStore;

#[async_trait]
impl EventStore for FailingEventStore {
    async fn get(&self, _event_id: &EventId) -> Result<Option<SharedRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn put(&self, _event_id: EventId, _record: SharedRecord) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn snapshot(&self) -> Result<Vec<(EventId, SharedRecord)>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

//! Event records and identifiers.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::DomainError;

/// Opaque, globally unique event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps an already generated identifier.
    #[must_use]
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Opaque, globally unique ticket identifier. Never reused once issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Wraps an already generated identifier.
    #[must_use]
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Booking state derived from the remaining ticket count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// At least one ticket remains.
    Open,
    /// No tickets remain; bookings fail with `InsufficientInventory`.
    SoldOut,
}

/// An event with a fixed capacity and a mutable remaining count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Identifier assigned at creation.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Scheduled date and time.
    pub date: DateTime<Utc>,
    /// Total capacity; never changes after creation.
    pub total_tickets: u32,
    /// Tickets still available; `0 <= available_tickets <= total_tickets`.
    pub available_tickets: u32,
}

impl EventRecord {
    /// Creates a record with every ticket available.
    #[must_use]
    pub fn new(id: EventId, name: String, date: DateTime<Utc>, total_tickets: u32) -> Self {
        Self {
            id,
            name,
            date,
            total_tickets,
            available_tickets: total_tickets,
        }
    }

    /// Returns whether the event can still be booked.
    #[must_use]
    pub fn availability(&self) -> Availability {
        if self.available_tickets == 0 {
            Availability::SoldOut
        } else {
            Availability::Open
        }
    }

    /// Checks that this record is well formed when stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the stored key does not
    /// match the record's own id, or if more tickets are available than the
    /// event's capacity.
    pub fn validate_for(&self, key: &EventId) -> Result<(), DomainError> {
        if &self.id != key {
            return Err(DomainError::Infrastructure(format!(
                "record {} stored under key {key}",
                self.id
            )));
        }
        if self.available_tickets > self.total_tickets {
            return Err(DomainError::Infrastructure(format!(
                "record {} has {} available of {} total",
                self.id, self.available_tickets, self.total_tickets
            )));
        }
        Ok(())
    }
}

/// A record together with its per-event exclusive lock.
///
/// Stored once in the event store and shared by reference with the cache.
/// Every mutation of `available_tickets` happens while holding this lock.
pub type SharedRecord = Arc<Mutex<EventRecord>>;

/// Wraps a record for storage.
#[must_use]
pub fn share(record: EventRecord) -> SharedRecord {
    Arc::new(Mutex::new(record))
}

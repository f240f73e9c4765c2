//! Commands for the inventory context.

use chrono::{DateTime, Utc};
use ticketbooth_core::command::Command;
use ticketbooth_core::record::EventId;
use uuid::Uuid;

/// Command to create a new event.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Display name of the event.
    pub name: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Capacity; every ticket starts out available.
    pub total_tickets: u32,
}

impl Command for CreateEvent {
    fn command_type(&self) -> &'static str {
        "inventory.create_event"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to book tickets for an existing event.
#[derive(Debug, Clone)]
pub struct BookTickets {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to book against.
    pub event_id: EventId,
    /// Number of tickets requested; must be positive.
    pub count: u32,
}

impl Command for BookTickets {
    fn command_type(&self) -> &'static str {
        "inventory.book_tickets"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

//! Ticketbooth Store — in-memory implementations of the event store and
//! the ticket ledger. Nothing here survives a restart.

pub mod in_memory_event_store;
pub mod in_memory_ticket_ledger;

pub use in_memory_event_store::InMemoryEventStore;
pub use in_memory_ticket_ledger::InMemoryTicketLedger;

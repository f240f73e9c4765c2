//! Domain error types.

use thiserror::Error;

use crate::record::EventId;

/// Errors returned by inventory operations.
///
/// None of these are retried internally; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller supplied a malformed or out-of-range argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No event exists with the given identifier.
    #[error("event not found: {0}")]
    NotFound(EventId),

    /// Fewer tickets remain than were requested. Never partially fulfilled.
    #[error(
        "insufficient inventory for event {event_id}: requested {requested}, available {available}"
    )]
    InsufficientInventory {
        /// The event that was being booked.
        event_id: EventId,
        /// Number of tickets requested.
        requested: u32,
        /// Number of tickets that were available.
        available: u32,
    },

    /// The identifier generator failed or produced a colliding value.
    #[error("identifier generation failed: {0}")]
    GenerationFailure(String),

    /// A collaborator (store, ledger) failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

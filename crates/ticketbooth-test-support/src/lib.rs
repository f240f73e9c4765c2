//! Shared test doubles for the Ticketbooth inventory service.

mod clock;
mod ids;
mod ledger;
mod store;

pub use clock::{FixedClock, SteppingClock};
pub use ids::{FailingIdGenerator, RepeatingIdGenerator, SequenceIdGenerator};
pub use ledger::FailingTicketLedger;
pub use store::{FailingEventStore, RecordingEventStore};

use chrono::{DateTime, TimeZone, Utc};

/// Fixed instant used as "now" across tests.
///
/// # Panics
///
/// Never in practice; the date literal is valid.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A future date to schedule test events on.
///
/// # Panics
///
/// Never in practice; the date literal is valid.
#[must_use]
pub fn show_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 20, 0, 0).unwrap()
}

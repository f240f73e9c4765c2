//! Ticketbooth — Inventory bounded context.
//!
//! Responsible for event creation, listing, and ticket booking, fronted by
//! a bounded least-recently-used cache of event records.

pub mod application;
pub mod domain;

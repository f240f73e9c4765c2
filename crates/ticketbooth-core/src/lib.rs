//! Ticketbooth Core — shared domain abstractions.
//!
//! This crate defines the record types and collaborator traits that the
//! inventory context and its infrastructure depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod id;
pub mod ledger;
pub mod record;
pub mod store;

//! Application layer: the inventory service and its handlers.

pub mod command_handlers;
pub mod query_handlers;
pub mod service;

pub use service::InventoryService;

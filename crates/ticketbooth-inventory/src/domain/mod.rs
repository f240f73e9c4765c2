//! Domain layer: the event cache and the commands it serves.

pub mod cache;
pub mod commands;

//! Command abstractions.

use uuid::Uuid;

/// A request to change inventory state.
///
/// Every command carries a correlation ID so the log lines it produces
/// can be tied back to the inbound request that issued it.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name used as a tracing field.
    fn command_type(&self) -> &'static str;

    /// Correlation ID of the originating request.
    fn correlation_id(&self) -> Uuid;
}

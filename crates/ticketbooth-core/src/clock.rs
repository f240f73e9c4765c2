//! Wall-clock source used for cache recency stamps.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Supplies the timestamps the event cache compares when picking an
/// eviction victim. Injected so tests can control recency ordering.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

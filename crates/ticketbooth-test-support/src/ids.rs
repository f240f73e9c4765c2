//! Test identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use ticketbooth_core::error::DomainError;
use ticketbooth_core::id::IdGenerator;

/// Produces `"{prefix}-1"`, `"{prefix}-2"`, ... and optionally fails once a
/// limit has been reached.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    issued: AtomicU64,
    limit: Option<u64>,
}

impl SequenceIdGenerator {
    /// Creates an unlimited generator.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            issued: AtomicU64::new(0),
            limit: None,
        }
    }

    /// Creates a generator that fails after issuing `limit` identifiers.
    #[must_use]
    pub fn with_limit(prefix: &str, limit: u64) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(prefix)
        }
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Result<String, DomainError> {
        let limit = self.limit.unwrap_or(u64::MAX);
        let previous = self
            .issued
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < limit).then_some(n + 1)
            })
            .map_err(|_| DomainError::GenerationFailure("id sequence exhausted".into()))?;
        Ok(format!("{}-{}", self.prefix, previous + 1))
    }
}

/// Always fails. Useful for exercising generation-failure paths.
#[derive(Debug)]
pub struct FailingIdGenerator;

impl IdGenerator for FailingIdGenerator {
    fn next_id(&self) -> Result<String, DomainError> {
        Err(DomainError::GenerationFailure("entropy source unavailable".into()))
    }
}

/// Returns the same identifier every time, forcing ticket collisions.
#[derive(Debug)]
pub struct RepeatingIdGenerator(pub String);

impl IdGenerator for RepeatingIdGenerator {
    fn next_id(&self) -> Result<String, DomainError> {
        Ok(self.0.clone())
    }
}

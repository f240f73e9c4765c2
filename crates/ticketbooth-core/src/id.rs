//! Identifier generation.
//!
//! Event and ticket identifiers come from an injected generator so tests
//! can produce predictable values and exercise generation failures.

use uuid::Uuid;

use crate::error::DomainError;

/// Produces collision-free identifiers for the lifetime of the process.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GenerationFailure` if no identifier can be
    /// produced.
    fn next_id(&self) -> Result<String, DomainError>;
}

/// Generates random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Result<String, DomainError> {
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_uuid_generator_produces_distinct_parseable_ids() {
        let generator = UuidGenerator;

        let ids: HashSet<String> = (0..100).map(|_| generator.next_id().unwrap()).collect();

        assert_eq!(ids.len(), 100);
        for id in &ids {
            Uuid::parse_str(id).unwrap();
        }
    }
}

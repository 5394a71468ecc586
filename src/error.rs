//! Error types for the actor state store.
//!
//! All errors are strongly typed using thiserror so callers can pattern
//! match on specific conditions instead of parsing messages.

use thiserror::Error;

use crate::actor::ActorId;

/// Errors surfaced by state-store operations.
///
/// Querying or updating a facet of an actor that is not registered is a
/// caller bug (a stage holding a stale id), so it is reported rather than
/// silently defaulted. Removing an absent actor and re-registering a present
/// one are deliberately *not* errors; racing retirement and registration
/// across pipeline stages is benign by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The given actor id is not registered in the store.
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),
}

impl StateError {
    /// Returns true if this is an actor-not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ActorNotFound(_))
    }
}

/// Result type alias for state-store operations.
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_id() {
        let err = StateError::ActorNotFound(ActorId::from(17));
        let msg = err.to_string();
        assert!(msg.contains("Actor not found"));
        assert!(msg.contains("17"));
    }

    #[test]
    fn test_error_predicate() {
        assert!(StateError::ActorNotFound(ActorId::from(1)).is_not_found());
    }
}

//! Actor identity and classification.
//!
//! Actor ids are assigned by the world engine when an actor spawns; the store
//! never generates them. The id is the sole join key across every facet of
//! per-actor state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, externally assigned actor identifier.
///
/// Once the world engine hands out an `ActorId` it is stable for the actor's
/// lifetime. Ids are never reused within a simulation episode.
///
/// # Examples
///
/// ```
/// use simstate::ActorId;
///
/// let id = ActorId::from(42);
/// assert_eq!(id.as_u64(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(u64);

impl ActorId {
    /// Creates an actor id from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<ActorId> for u64 {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

/// Classification of a simulated actor.
///
/// Mirrors the categories the pipeline stages distinguish when deciding
/// whether an actor participates in collision avoidance, traffic-light
/// evaluation, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    /// A vehicle under simulation control.
    Vehicle,
    /// A walker/pedestrian.
    Pedestrian,
    /// Unclassified or wildcard actor.
    Any,
}

impl ActorType {
    /// Returns true for vehicles.
    #[must_use]
    pub const fn is_vehicle(self) -> bool {
        matches!(self, Self::Vehicle)
    }

    /// Returns true for pedestrians.
    #[must_use]
    pub const fn is_pedestrian(self) -> bool {
        matches!(self, Self::Pedestrian)
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vehicle => "vehicle",
            Self::Pedestrian => "pedestrian",
            Self::Any => "any",
        };
        write!(f, "{name}")
    }
}

//! The static facet: attributes fixed at registration.
//!
//! There is intentionally no update operation for this facet. Attributes are
//! immutable for the actor's lifetime in the store; the only way to revise
//! them is to re-register the actor, which replaces the whole record
//! atomically.

use serde::{Deserialize, Serialize};

use crate::actor::ActorType;
use crate::geom::Vector3D;

/// Attributes of one actor that never change between registration and
/// removal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticAttributes {
    /// Classification used by the pipeline stages.
    pub actor_type: ActorType,
    /// Bounding-box half-sizes in meters (x: half length, y: half width,
    /// z: half height).
    pub half_extents: Vector3D,
}

impl StaticAttributes {
    /// Creates attributes for an actor of the given type and bounding box.
    #[must_use]
    pub const fn new(actor_type: ActorType, half_extents: Vector3D) -> Self {
        Self {
            actor_type,
            half_extents,
        }
    }
}

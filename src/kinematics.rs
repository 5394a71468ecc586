//! The kinematic facet: per-tick-mutable motion state.
//!
//! Exactly one pipeline stage (localization) writes this facet for a given
//! actor each tick; everything else reads it.

use serde::{Deserialize, Serialize};

use crate::geom::{Location, Rotation, Vector3D};

/// Motion state of one actor, replaced wholesale on every update.
///
/// The heading is deliberately absent: it is derived from `rotation` on
/// demand (see [`Rotation::forward_vector`]) so it can never disagree with
/// the latest orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// World-space position.
    pub location: Location,
    /// Orientation in degrees.
    pub rotation: Rotation,
    /// Velocity in meters per second.
    pub velocity: Vector3D,
    /// Speed limit currently governing the actor, m/s, non-negative.
    pub speed_limit: f32,
    /// Whether the physics engine is simulating this actor.
    pub physics_enabled: bool,
}

impl KinematicState {
    /// Unit forward vector for the current rotation.
    #[must_use]
    pub fn heading(&self) -> Vector3D {
        self.rotation.forward_vector()
    }

    /// Current scalar speed, m/s.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            location: Location::default(),
            rotation: Rotation::default(),
            velocity: Vector3D::ZERO,
            speed_limit: 0.0,
            physics_enabled: true,
        }
    }
}

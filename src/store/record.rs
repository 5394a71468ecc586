//! The per-actor row holding every facet.

use serde::{Deserialize, Serialize};

use crate::attributes::StaticAttributes;
use crate::kinematics::KinematicState;
use crate::signals::{TrafficLightStage, VehicleLightState};

/// Complete state of one actor: all four facets in a single record.
///
/// A record is created whole at registration and destroyed whole at removal,
/// which is what keeps the presence invariant from ever being observable in
/// a half-applied state. The kinematic and traffic-light facets are mutated
/// in place over the actor's life; static attributes and vehicle lights are
/// fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
    /// Per-tick motion state, written by the localization stage.
    pub kinematics: KinematicState,
    /// Write-once attributes supplied at registration.
    pub attributes: StaticAttributes,
    /// Stage of the traffic light governing this actor, written by the
    /// traffic-light stage.
    pub traffic_light: TrafficLightStage,
    /// Lights the actor emits, supplied at registration.
    pub vehicle_lights: VehicleLightState,
}

impl ActorRecord {
    /// Assembles a record from its facets.
    #[must_use]
    pub const fn new(
        kinematics: KinematicState,
        attributes: StaticAttributes,
        traffic_light: TrafficLightStage,
        vehicle_lights: VehicleLightState,
    ) -> Self {
        Self {
            kinematics,
            attributes,
            traffic_light,
            vehicle_lights,
        }
    }
}

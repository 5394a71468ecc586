//! # simstate - Actor State Store for Traffic Simulation
//!
//! `simstate` is the authoritative record of every simulated vehicle's
//! kinematic, static, and signal state inside a real-time multi-stage
//! traffic-simulation pipeline. It is the synchronization boundary between
//! independently scheduled pipeline stages (localization, collision
//! avoidance, traffic-light evaluation, motion planning) that read and write
//! overlapping subsets of per-actor data every simulation tick.
//!
//! ## Core Concepts
//!
//! - **Actor**: a simulated vehicle or other agent, identified by an
//!   externally assigned [`ActorId`]
//! - **Facet**: one category of per-actor data — kinematic, static
//!   attribute, traffic-light, or vehicle-light state
//! - **Presence invariant**: an actor id is fully represented across all
//!   facets or not represented at all; enforced structurally by storing all
//!   facets in a single [`ActorRecord`] per id
//!
//! ## Usage
//!
//! ```rust
//! use simstate::{
//!     ActorId, ActorType, KinematicState, Location, Rotation, SimulationState,
//!     StaticAttributes, TrafficLightStage, Vector3D, VehicleLightState,
//! };
//!
//! let state = SimulationState::new();
//!
//! let kinematics = KinematicState {
//!     location: Location::new(0.0, 0.0, 0.0),
//!     rotation: Rotation::default(),
//!     velocity: Vector3D::new(1.0, 0.0, 0.0),
//!     speed_limit: 30.0,
//!     physics_enabled: true,
//! };
//! let attributes = StaticAttributes {
//!     actor_type: ActorType::Vehicle,
//!     half_extents: Vector3D::new(2.0, 1.0, 0.75),
//! };
//!
//! state.add_actor(
//!     ActorId::from(1),
//!     kinematics,
//!     attributes,
//!     TrafficLightStage::Green,
//!     VehicleLightState::NONE,
//! );
//!
//! assert!(state.contains_actor(ActorId::from(1)));
//! let heading = state.heading(ActorId::from(1))?;
//! assert!((heading.x - 1.0).abs() < 1e-6);
//! # Ok::<(), simstate::StateError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod attributes;
pub mod error;
pub mod geom;
pub mod kinematics;
pub mod signals;
pub mod store;

// Re-export primary types at crate root for convenience
pub use actor::{ActorId, ActorType};
pub use attributes::StaticAttributes;
pub use error::{StateError, StateResult};
pub use geom::{Location, Rotation, Vector3D};
pub use kinematics::KinematicState;
pub use signals::{TrafficLightStage, VehicleLightState};
pub use store::{ActorRecord, SimulationState};

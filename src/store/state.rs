//! The shared store and its operation surface.

use dashmap::DashMap;

use crate::actor::{ActorId, ActorType};
use crate::attributes::StaticAttributes;
use crate::error::{StateError, StateResult};
use crate::geom::{Location, Rotation, Vector3D};
use crate::kinematics::KinematicState;
use crate::signals::{TrafficLightStage, VehicleLightState};
use crate::store::record::ActorRecord;

/// The authoritative record of every live actor's state.
///
/// One long-lived instance is created at pipeline start and shared (behind
/// an `Arc`) by every stage; no stage owns it. All methods take `&self` and
/// are safe to call from any thread.
///
/// # Concurrency contract
///
/// Backed by a sharded concurrent map with entry-level locking, so:
///
/// - operations on different actor ids proceed in parallel; a read of one
///   actor is never blocked by a write to another
/// - each id's timeline of add/update/remove is linearizable: a reader sees
///   either the state before a mutation or after it, never a mix of facets
/// - `add_actor` and `remove_actor` insert or erase the whole record in one
///   map operation, so the presence invariant holds under any interleaving
///
/// The store does *not* arbitrate same-actor write races. The pipeline
/// contract assigns at most one writer per actor per facet per tick;
/// concurrent writers to the same id are memory safe and serialized by the
/// entry lock, but which write wins is unspecified.
///
/// # Storage errors
///
/// Accessors and facet updates fail with
/// [`StateError::ActorNotFound`] when the id is absent; see [`crate::error`]
/// for which operations are deliberately infallible instead.
#[derive(Debug, Default)]
pub struct SimulationState {
    actors: DashMap<ActorId, ActorRecord>,
}

impl SimulationState {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store pre-sized for `capacity` actors.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actors: DashMap::with_capacity(capacity),
        }
    }

    /// Registers an actor, supplying all four facets atomically.
    ///
    /// Upsert semantics: if `actor_id` is already present the whole record
    /// is replaced, and a concurrent reader observes either the old record
    /// or the new one, never a mixture.
    pub fn add_actor(
        &self,
        actor_id: ActorId,
        kinematics: KinematicState,
        attributes: StaticAttributes,
        traffic_light: TrafficLightStage,
        vehicle_lights: VehicleLightState,
    ) {
        self.actors.insert(
            actor_id,
            ActorRecord::new(kinematics, attributes, traffic_light, vehicle_lights),
        );
    }

    /// Returns true if the actor is currently registered.
    #[must_use]
    pub fn contains_actor(&self, actor_id: ActorId) -> bool {
        self.actors.contains_key(&actor_id)
    }

    /// Removes an actor and every facet of its state.
    ///
    /// Removing an absent id is a no-op: multiple stages may race to retire
    /// the same dead actor, and the loser of that race is not at fault.
    pub fn remove_actor(&self, actor_id: ActorId) {
        self.actors.remove(&actor_id);
    }

    /// Clears every actor, e.g. between simulation episodes.
    pub fn reset(&self) {
        self.actors.clear();
    }

    /// Number of registered actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Returns true if no actors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Ids of all currently registered actors.
    ///
    /// The snapshot is taken shard by shard; actors added or removed while
    /// it is being assembled may or may not appear.
    #[must_use]
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.actors.iter().map(|entry| *entry.key()).collect()
    }

    /// Point-in-time copy of every record, e.g. for episode capture.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(ActorId, ActorRecord)> {
        self.actors
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect()
    }

    /// Replaces the kinematic facet of a registered actor.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn update_kinematic_state(
        &self,
        actor_id: ActorId,
        state: KinematicState,
    ) -> StateResult<()> {
        match self.actors.get_mut(&actor_id) {
            Some(mut record) => {
                record.kinematics = state;
                Ok(())
            }
            None => Err(StateError::ActorNotFound(actor_id)),
        }
    }

    /// Replaces the traffic-light facet of a registered actor.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn update_traffic_light_state(
        &self,
        actor_id: ActorId,
        stage: TrafficLightStage,
    ) -> StateResult<()> {
        match self.actors.get_mut(&actor_id) {
            Some(mut record) => {
                record.traffic_light = stage;
                Ok(())
            }
            None => Err(StateError::ActorNotFound(actor_id)),
        }
    }

    /// Whole-record read, taking every facet under one entry lock.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn actor_record(&self, actor_id: ActorId) -> StateResult<ActorRecord> {
        self.read(actor_id, |record| *record)
    }

    /// Current world-space position.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn location(&self, actor_id: ActorId) -> StateResult<Location> {
        self.read(actor_id, |record| record.kinematics.location)
    }

    /// Current orientation.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn rotation(&self, actor_id: ActorId) -> StateResult<Rotation> {
        self.read(actor_id, |record| record.kinematics.rotation)
    }

    /// Unit forward vector, recomputed from the current rotation.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn heading(&self, actor_id: ActorId) -> StateResult<Vector3D> {
        self.read(actor_id, |record| record.kinematics.heading())
    }

    /// Current velocity, m/s.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn velocity(&self, actor_id: ActorId) -> StateResult<Vector3D> {
        self.read(actor_id, |record| record.kinematics.velocity)
    }

    /// Speed limit currently governing the actor, m/s.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn speed_limit(&self, actor_id: ActorId) -> StateResult<f32> {
        self.read(actor_id, |record| record.kinematics.speed_limit)
    }

    /// Whether the physics engine is simulating the actor.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn is_physics_enabled(&self, actor_id: ActorId) -> StateResult<bool> {
        self.read(actor_id, |record| record.kinematics.physics_enabled)
    }

    /// Stage of the traffic light governing the actor.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn traffic_light_state(&self, actor_id: ActorId) -> StateResult<TrafficLightStage> {
        self.read(actor_id, |record| record.traffic_light)
    }

    /// Lights the actor is emitting.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn vehicle_light_state(&self, actor_id: ActorId) -> StateResult<VehicleLightState> {
        self.read(actor_id, |record| record.vehicle_lights)
    }

    /// The actor's classification.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn actor_type(&self, actor_id: ActorId) -> StateResult<ActorType> {
        self.read(actor_id, |record| record.attributes.actor_type)
    }

    /// Bounding-box half-sizes.
    ///
    /// # Errors
    ///
    /// [`StateError::ActorNotFound`] if `actor_id` is not registered.
    pub fn dimensions(&self, actor_id: ActorId) -> StateResult<Vector3D> {
        self.read(actor_id, |record| record.attributes.half_extents)
    }

    /// Copies a value out of the actor's record under its entry lock. The
    /// guard never escapes, so callers cannot hold state past removal.
    fn read<T>(&self, actor_id: ActorId, f: impl FnOnce(&ActorRecord) -> T) -> StateResult<T> {
        self.actors
            .get(&actor_id)
            .map(|entry| f(entry.value()))
            .ok_or(StateError::ActorNotFound(actor_id))
    }
}

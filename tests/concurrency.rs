//! Concurrency properties of the shared store.
//!
//! These tests drive the store from multiple OS threads the way the pipeline
//! stages do: disjoint actor populations per writer, readers scanning the
//! whole population in parallel.

use std::thread;

use crossbeam_channel::unbounded;

use simstate::{
    ActorId, ActorType, KinematicState, Location, Rotation, SimulationState, StateError,
    StaticAttributes, TrafficLightStage, Vector3D, VehicleLightState,
};

const WRITERS: u64 = 8;
const ACTORS_PER_WRITER: u64 = 250;

fn vehicle_attrs() -> StaticAttributes {
    StaticAttributes::new(ActorType::Vehicle, Vector3D::new(2.3, 1.0, 0.8))
}

/// A record whose facets are all derived from one seed, so a reader can
/// detect a torn (mixed old/new) observation.
fn coherent_kinematics(seed: f32) -> KinematicState {
    KinematicState {
        location: Location::new(seed, seed, seed),
        rotation: Rotation::new(0.0, seed, 0.0),
        velocity: Vector3D::new(seed, 0.0, 0.0),
        speed_limit: seed,
        physics_enabled: true,
    }
}

#[test]
fn concurrent_registration_of_distinct_ids_loses_nothing() {
    let state = SimulationState::with_capacity((WRITERS * ACTORS_PER_WRITER) as usize);

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let state = &state;
            scope.spawn(move || {
                for i in 0..ACTORS_PER_WRITER {
                    let id = ActorId::from(writer * ACTORS_PER_WRITER + i);
                    state.add_actor(
                        id,
                        KinematicState::default(),
                        vehicle_attrs(),
                        TrafficLightStage::Green,
                        VehicleLightState::NONE,
                    );
                }
            });
        }
    });

    assert_eq!(state.actor_count(), (WRITERS * ACTORS_PER_WRITER) as usize);
    for raw in 0..WRITERS * ACTORS_PER_WRITER {
        let id = ActorId::from(raw);
        assert!(state.contains_actor(id), "actor {id} missing after join");
        assert_eq!(state.actor_type(id), Ok(ActorType::Vehicle));
    }
}

#[test]
fn racing_removal_of_the_same_actor_is_benign() {
    let state = SimulationState::new();
    let id = ActorId::from(1);
    state.add_actor(
        id,
        KinematicState::default(),
        vehicle_attrs(),
        TrafficLightStage::Red,
        VehicleLightState::NONE,
    );

    // Several stages may try to retire a dead actor in the same tick.
    thread::scope(|scope| {
        for _ in 0..4 {
            let state = &state;
            scope.spawn(move || state.remove_actor(id));
        }
    });

    assert!(!state.contains_actor(id));
    assert_eq!(state.location(id), Err(StateError::ActorNotFound(id)));
}

#[test]
fn readers_never_observe_a_torn_record() {
    let state = SimulationState::new();
    let id = ActorId::from(7);
    state.add_actor(
        id,
        coherent_kinematics(1.0),
        vehicle_attrs(),
        TrafficLightStage::Green,
        VehicleLightState::NONE,
    );

    let (tx, rx) = unbounded::<String>();

    thread::scope(|scope| {
        // One writer re-registers the actor with fresh coherent records.
        {
            let state = &state;
            scope.spawn(move || {
                for round in 2..200u32 {
                    #[allow(clippy::cast_precision_loss)]
                    let seed = round as f32;
                    state.add_actor(
                        id,
                        coherent_kinematics(seed),
                        vehicle_attrs(),
                        TrafficLightStage::Green,
                        VehicleLightState::NONE,
                    );
                }
            });
        }

        // Readers check that every observed record is internally consistent.
        for _ in 0..4 {
            let state = &state;
            let tx = tx.clone();
            scope.spawn(move || {
                for _ in 0..500 {
                    if let Ok(record) = state.actor_record(id) {
                        let k = record.kinematics;
                        let seed = k.speed_limit;
                        if k.location.x != seed || k.velocity.x != seed || k.rotation.yaw != seed {
                            let _ = tx.send(format!(
                                "torn record: speed_limit={seed} location.x={} velocity.x={} yaw={}",
                                k.location.x, k.velocity.x, k.rotation.yaw
                            ));
                        }
                    }
                }
            });
        }
        drop(tx);
    });

    let violations: Vec<String> = rx.iter().collect();
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn updates_and_reads_on_different_actors_do_not_interfere() {
    let state = SimulationState::new();
    for raw in 0..4u64 {
        state.add_actor(
            ActorId::from(raw),
            coherent_kinematics(0.0),
            vehicle_attrs(),
            TrafficLightStage::Green,
            VehicleLightState::NONE,
        );
    }

    let (tx, rx) = unbounded::<StateError>();

    thread::scope(|scope| {
        // Each writer owns one actor, matching the one-writer-per-facet
        // pipeline contract.
        for raw in 0..4u64 {
            let state = &state;
            let tx = tx.clone();
            scope.spawn(move || {
                let id = ActorId::from(raw);
                for tick in 0..1000u32 {
                    #[allow(clippy::cast_precision_loss)]
                    let k = coherent_kinematics(tick as f32);
                    if let Err(e) = state.update_kinematic_state(id, k) {
                        let _ = tx.send(e);
                    }
                }
            });
        }

        // A reader scanning the whole population, like the collision stage.
        {
            let state = &state;
            let tx = tx.clone();
            scope.spawn(move || {
                for _ in 0..1000 {
                    for raw in 0..4u64 {
                        if let Err(e) = state.location(ActorId::from(raw)) {
                            let _ = tx.send(e);
                        }
                    }
                }
            });
        }
        drop(tx);
    });

    let failures: Vec<StateError> = rx.iter().collect();
    assert!(failures.is_empty(), "{failures:?}");

    // Every actor ends at the final tick's kinematics.
    for raw in 0..4u64 {
        assert_eq!(state.speed_limit(ActorId::from(raw)), Ok(999.0));
    }
}

#[test]
fn reset_during_reads_leaves_no_partial_actors() {
    let state = SimulationState::new();
    for raw in 0..100u64 {
        state.add_actor(
            ActorId::from(raw),
            coherent_kinematics(1.0),
            vehicle_attrs(),
            TrafficLightStage::Green,
            VehicleLightState::NONE,
        );
    }

    thread::scope(|scope| {
        {
            let state = &state;
            scope.spawn(move || state.reset());
        }
        // Readers racing the reset must get either a full record or
        // ActorNotFound, which actor_record guarantees by construction.
        for _ in 0..4 {
            let state = &state;
            scope.spawn(move || {
                for raw in 0..100u64 {
                    let _ = state.actor_record(ActorId::from(raw));
                }
            });
        }
    });

    assert!(state.is_empty());
    assert!(state.actor_ids().is_empty());
}

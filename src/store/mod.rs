//! The concurrent actor state store.
//!
//! One logical table keyed by [`ActorId`](crate::ActorId), with four column
//! groups (kinematic, static, traffic-light, vehicle-light) held together in
//! an [`ActorRecord`]. Storing the facets in a single row makes the presence
//! invariant structural: an id either maps to a complete record or to
//! nothing, so no facet can be orphaned and no index entry can lack backing
//! data.

mod record;
mod state;

pub use record::ActorRecord;
pub use state::SimulationState;

//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only
//! - Seeded RNG only
//! - Stable iteration order (by particle index)
//! - No rendering or platform dependencies; diagnostics go through `SimObserver`

pub mod collision;
pub mod events;
pub mod frame;
pub mod rotation;
pub mod state;
pub mod tick;

pub use collision::{ContactResult, WallHits, clamp_to_walls, particle_contact, resolve_pair, resolve_walls};
pub use events::{EventLog, LogObserver, SimEvent, SimObserver};
pub use frame::{box_center, box_corners, box_half_size, box_side, from_local, rotate_vector, to_local};
pub use rotation::{RotationChange, all_settled};
pub use state::{BoxPhase, BoxState, Particle, Simulation};
pub use tick::{step, update_particles};

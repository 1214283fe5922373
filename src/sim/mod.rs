//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches rendering or
//! the host platform:
//! - One `tick()` per displayed frame
//! - Seeded RNG only
//! - Collections are rebuilt each tick, never edited mid-iteration

pub mod autopilot;
pub mod collision;
pub mod lanes;
pub mod motion;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionReport, Contact, entity_box, player_box};
pub use lanes::LaneGrid;
pub use snapshot::Snapshot;
pub use state::{Entity, EntityKind, GameEvent, GamePhase, GameState, Player};
pub use tick::{InputCommand, apply_command, tick};

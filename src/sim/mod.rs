//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entities keep spawn order; sweeps run last)
//! - No rendering, audio or platform dependencies
//!
//! The shell observes the simulation through [`GameState`] fields and the
//! drained [`GameEvent`] queue.

pub mod collision;
pub mod screen;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, tap_in_play_area, tap_target};
pub use screen::{LoadingSequencer, MascotState, Screen};
pub use spawn::{Difficulty, SpawnParams, hatch, spawn_params};
pub use state::{Chicken, ChickenState, GameEvent, GameState, Playfield, StepOutcome};
pub use tick::{MenuAction, TickInput, tick};

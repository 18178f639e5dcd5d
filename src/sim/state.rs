//! Game state and core simulation types
//!
//! Everything a front end needs to draw a frame lives here. The simulation
//! must stay deterministic: seeded RNG, fixed timestep, stable iteration
//! order (entities keep their spawn order; sweeps happen after iteration).

use std::f32::consts::PI;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::screen::{LoadingSequencer, MascotState, Screen};
use super::spawn::{self, Difficulty};
use crate::consts::{CHICKEN_HEIGHT_FRACTION, GROUND_BAND_FRACTION};
use crate::tuning::Tuning;

/// Lifecycle of a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChickenState {
    /// Rising and falling along the sine arc, hittable
    Jumping,
    /// Tapped mid-arc, dropping straight down
    Hit,
    /// Finished; swept from the live collection on the same tick
    Done,
}

/// A jumping target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chicken {
    pub id: u32,
    /// Bottom-left corner; x is simulated, y derived from the jump phase
    pub pos: Vec2,
    /// Horizontal drift per tick; sign flips on edge bounce
    pub vx: f32,
    /// Ground-relative resting altitude
    pub base_height: f32,
    /// Sine-arc accumulator; advances only while `Jumping`
    pub jump_phase: f32,
    /// Peak height of this target's arc
    pub jump_amplitude: f32,
    /// Phase advance per tick
    pub jump_rate: f32,
    /// Descent per tick once hit
    pub fall_rate: f32,
    pub state: ChickenState,
    /// Whether the player tapped this target before its arc completed
    pub was_hit: bool,
    /// Guards the one-shot jump cue
    pub jump_cue_played: bool,
}

/// What a single physics step produced
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    /// First tick this target was observed jumping
    pub jump_cue: bool,
    /// The arc completed with `was_hit` still false
    pub missed: bool,
}

impl Chicken {
    /// Bounding box for tap hit-testing
    pub fn bounds(&self, sprite: Vec2) -> Aabb {
        Aabb::new(self.pos, sprite)
    }

    /// Advance one tick of motion. Horizontal drift applies in every
    /// lifecycle state; vertical motion depends on it.
    pub fn step(&mut self, max_x: f32) -> StepOutcome {
        let mut out = StepOutcome::default();

        if self.state == ChickenState::Jumping && !self.jump_cue_played {
            self.jump_cue_played = true;
            out.jump_cue = true;
        }

        self.pos.x += self.vx;
        if self.pos.x <= 0.0 || self.pos.x >= max_x {
            self.vx = -self.vx;
            self.pos.x = self.pos.x.clamp(0.0, max_x);
        }

        match self.state {
            ChickenState::Jumping => {
                self.jump_phase += self.jump_rate;
                self.pos.y = self.base_height + self.jump_phase.sin() * self.jump_amplitude;
                if self.jump_phase >= PI {
                    // Arc returned to ground; the turn is over
                    if !self.was_hit {
                        out.missed = true;
                    }
                    self.state = ChickenState::Done;
                }
            }
            ChickenState::Hit => {
                self.pos.y -= self.fall_rate;
                if self.pos.y <= 0.0 {
                    self.state = ChickenState::Done;
                }
            }
            ChickenState::Done => {}
        }

        out
    }
}

/// Playfield geometry, captured once from the window/sprite layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Ground band along the bottom; taps inside it are ignored
    pub ground_band: f32,
    /// Target sprite bounding size
    pub chicken_size: Vec2,
}

impl Playfield {
    pub fn new(width: f32, height: f32, chicken_size: Vec2) -> Self {
        Self {
            width,
            height,
            ground_band: height * GROUND_BAND_FRACTION,
            chicken_size,
        }
    }

    /// Square-sprite playfield for headless runs and tests
    pub fn headless(width: f32, height: f32) -> Self {
        let side = height * CHICKEN_HEIGHT_FRACTION;
        Self::new(width, height, Vec2::new(side, side))
    }

    /// Rightmost legal x for a target's left edge
    pub fn max_x(&self) -> f32 {
        self.width - self.chicken_size.x
    }
}

/// Simulation-to-shell notifications, drained once per tick by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A target began its jump (one per target)
    Jump,
    /// The player tapped a target
    Hit,
    /// The miss cap was reached (one per round)
    Failed,
}

/// Complete game state
///
/// Owned by a single driving loop; ticks must never overlap.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub playfield: Playfield,
    pub tuning: Tuning,
    /// Current screen mode
    pub screen: Screen,
    /// Scripted startup sequence, active only while `screen` is `Loading`
    pub loading: LoadingSequencer,
    /// Home-screen mascot easter egg
    pub mascot: MascotState,
    /// Cycled by the player; survives round resets
    pub difficulty: Difficulty,
    pub score: u32,
    pub misses: u32,
    /// One fail cue per round
    pub fail_cue_played: bool,
    /// Live targets in spawn order
    pub chickens: Vec<Chicken>,
    /// Seconds since the last scheduled spawn
    pub spawn_timer: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game at the loading screen
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        Self {
            seed,
            playfield,
            tuning: Tuning::default(),
            screen: Screen::Loading,
            loading: LoadingSequencer::new(),
            mascot: MascotState::default(),
            difficulty: Difficulty::default(),
            score: 0,
            misses: 0,
            fail_cue_played: false,
            chickens: Vec::new(),
            spawn_timer: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fresh round: zeroed counters and a single newly hatched target.
    /// Difficulty is untouched.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.misses = 0;
        self.fail_cue_played = false;
        self.spawn_timer = 0.0;
        self.chickens.clear();
        self.spawn_chicken();
    }

    /// Hatch one target at the current score and add it to the live set
    pub fn spawn_chicken(&mut self) {
        let mut chicken = spawn::hatch(&mut self.rng, &self.playfield, &self.tuning, self.score);
        chicken.id = self.next_entity_id();
        self.chickens.push(chicken);
    }

    /// Take this tick's notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Misses that end the round
    pub fn miss_cap(&self) -> u32 {
        self.tuning.miss_cap
    }
}

//! Spawn scheduling and difficulty curves
//!
//! Score drives two derived quantities per difficulty tier: the cap on
//! concurrent targets and the interval between scheduled spawns. Higher
//! tiers allow more targets at shorter intervals; both curves are clamped
//! to tier-specific bounds from [`Tuning`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Chicken, ChickenState, Playfield};
use crate::tuning::Tuning;

/// Difficulty preset, cycled by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Next preset in the cycle shown on the difficulty button
    pub fn cycled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Derived spawn quantities for the current score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    /// Cap on concurrent live targets
    pub max_live: usize,
    /// Seconds between scheduled spawns
    pub interval: f32,
}

/// Evaluate a tier's spawn curve at the given score
pub fn spawn_params(difficulty: Difficulty, score: u32, tuning: &Tuning) -> SpawnParams {
    let tier = tuning.tier(difficulty);
    let max_live = (tier.cap_base + score / tier.cap_score_step).min(tier.cap_max) as usize;
    let interval = (tier.interval_base - score as f32 * tier.interval_per_score)
        .max(tier.interval_min);
    SpawnParams { max_live, interval }
}

/// Hatch one target from the tuned random draws. The amplitude band is
/// score-independent; jump rate, fall rate and drift all carry a
/// score-scaled component. The caller assigns the entity id.
pub fn hatch(rng: &mut impl Rng, playfield: &Playfield, tuning: &Tuning, score: u32) -> Chicken {
    let amplitude = rng.random_range(
        tuning.jump_band.0 * playfield.height..=tuning.jump_band.1 * playfield.height,
    );

    let jump_rate = (tuning.jump_rate_base
        + score as f32 * tuning.jump_rate_per_score
        + rng.random_range(tuning.jump_rate_jitter.0..=tuning.jump_rate_jitter.1))
    .max(tuning.jump_rate_min);

    let fall_rate = (tuning.fall_rate_base
        + score as f32 * tuning.fall_rate_per_score
        + rng.random_range(tuning.fall_rate_jitter.0..=tuning.fall_rate_jitter.1))
    .max(tuning.fall_rate_min);

    let drift = tuning.drift_half_width + score as f32 * tuning.drift_per_score;

    Chicken {
        id: 0,
        pos: Vec2::new(rng.random_range(0.0..=playfield.max_x()), 0.0),
        vx: rng.random_range(-drift..=drift),
        base_height: 0.0,
        jump_phase: 0.0,
        jump_amplitude: amplitude,
        jump_rate,
        fall_rate,
        state: ChickenState::Jumping,
        was_hit: false,
        jump_cue_played: false,
    }
}

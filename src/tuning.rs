//! Data-driven game balance
//!
//! Every gameplay number lives here so difficulty curves and entity physics
//! can be adjusted without touching simulation code. Defaults reproduce the
//! shipped arcade values. Entity speeds are per-tick quantities at the
//! nominal 30 Hz timestep; only the timer fields are in seconds.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Spawn curve for one difficulty tier: how the concurrent-target cap and
/// the spawn interval respond to score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierTuning {
    /// Concurrent-target cap at score 0
    pub cap_base: u32,
    /// One extra concurrent target per this many points
    pub cap_score_step: u32,
    /// Ceiling on concurrent targets
    pub cap_max: u32,
    /// Spawn interval at score 0, seconds
    pub interval_base: f32,
    /// Interval shrink per point, seconds
    pub interval_per_score: f32,
    /// Interval floor, seconds
    pub interval_min: f32,
}

/// All gameplay tuning in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Jump amplitude band as fractions of playfield height
    pub jump_band: (f32, f32),
    /// Jump phase advance per tick at score 0, radians
    pub jump_rate_base: f32,
    /// Extra phase advance per point of score
    pub jump_rate_per_score: f32,
    /// Uniform jitter band added to the jump rate at creation
    pub jump_rate_jitter: (f32, f32),
    /// Floor keeping every arc moving forward
    pub jump_rate_min: f32,
    /// Post-hit descent at score 0, pixels per tick
    pub fall_rate_base: f32,
    /// Extra descent per point of score
    pub fall_rate_per_score: f32,
    /// Uniform jitter band added to the fall rate at creation
    pub fall_rate_jitter: (f32, f32),
    /// Floor keeping a hit target falling
    pub fall_rate_min: f32,
    /// Horizontal drift half-width at score 0, pixels per tick
    pub drift_half_width: f32,
    /// Extra drift half-width per point of score
    pub drift_per_score: f32,
    /// Misses that end the round
    pub miss_cap: u32,
    /// Spawn curves indexed by [`Difficulty`]: [Easy, Medium, Hard]
    pub tiers: [TierTuning; 3],
    /// Seconds between scripted loading steps
    pub loading_step_interval: f32,
    /// Hold on the finished loading bar before entering the menu
    pub loading_finish_delay: f32,
    /// Seconds of holding the home mascot before it cooks
    pub mascot_cook_hold: f32,
    /// Seconds the cooked mascot stays cooked
    pub mascot_cooked_for: f32,
}

impl Tuning {
    /// Spawn curve for a tier
    pub fn tier(&self, difficulty: Difficulty) -> &TierTuning {
        &self.tiers[difficulty as usize]
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_band: (0.317, 0.733),
            jump_rate_base: 0.05,
            jump_rate_per_score: 0.001,
            jump_rate_jitter: (-0.005, 0.01),
            jump_rate_min: 0.01,
            fall_rate_base: 5.0,
            fall_rate_per_score: 0.1,
            fall_rate_jitter: (-0.5, 1.0),
            fall_rate_min: 1.0,
            drift_half_width: 0.7,
            drift_per_score: 0.0005,
            miss_cap: 100,
            tiers: [
                // Easy
                TierTuning {
                    cap_base: 1,
                    cap_score_step: 15,
                    cap_max: 5,
                    interval_base: 2.0,
                    interval_per_score: 0.01,
                    interval_min: 0.7,
                },
                // Medium
                TierTuning {
                    cap_base: 2,
                    cap_score_step: 10,
                    cap_max: 7,
                    interval_base: 1.5,
                    interval_per_score: 0.015,
                    interval_min: 0.5,
                },
                // Hard
                TierTuning {
                    cap_base: 3,
                    cap_score_step: 7,
                    cap_max: 10,
                    interval_base: 1.0,
                    interval_per_score: 0.02,
                    interval_min: 0.4,
                },
            ],
            loading_step_interval: 0.15,
            loading_finish_delay: 0.4,
            mascot_cook_hold: 5.0,
            mascot_cooked_for: 3.0,
        }
    }
}

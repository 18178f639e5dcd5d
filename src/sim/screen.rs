//! Screen modes and scripted sequences
//!
//! The mode enum the state machine runs on, the startup loading sequencer,
//! and the home-screen mascot easter egg. Transition rules live in
//! [`super::tick`].

use serde::{Deserialize, Serialize};

/// Current screen mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Scripted startup; the only screen with a non-interactive exit
    Loading,
    Home,
    Settings,
    About,
    Playing,
    Paused,
    GameOver,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Loading => "loading",
            Screen::Home => "home",
            Screen::Settings => "settings",
            Screen::About => "about",
            Screen::Playing => "playing",
            Screen::Paused => "paused",
            Screen::GameOver => "gameover",
        }
    }
}

/// Ordered initialization steps run by the loading screen. Actual asset
/// loading happens in the front end; these pace the progress bar.
const LOADING_STEPS: &[&str] = &["images", "backgrounds", "sounds", "music", "finish"];

/// Scripted startup sequence: one step per cadence interval, a progress
/// fraction for the bar, and a short hold before the menu appears.
#[derive(Debug, Clone, Default)]
pub struct LoadingSequencer {
    completed: usize,
    step_timer: f32,
    exit_timer: f32,
}

impl LoadingSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Returns true once every step has run and the
    /// exit hold has elapsed.
    pub fn advance(&mut self, dt: f32, step_interval: f32, finish_delay: f32) -> bool {
        if self.completed < LOADING_STEPS.len() {
            self.step_timer += dt;
            while self.step_timer >= step_interval && self.completed < LOADING_STEPS.len() {
                self.step_timer -= step_interval;
                log::info!("loading: {}", LOADING_STEPS[self.completed]);
                self.completed += 1;
            }
            false
        } else {
            self.exit_timer += dt;
            self.exit_timer >= finish_delay
        }
    }

    /// Fraction of steps completed, in [0, 1]
    pub fn progress(&self) -> f32 {
        self.completed as f32 / LOADING_STEPS.len() as f32
    }
}

/// Home-screen mascot: hold the pointer on it long enough and it cooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MascotState {
    holding: bool,
    hold_time: f32,
    /// Render the fried sprite while set
    pub cooked: bool,
    cooked_time: f32,
}

impl MascotState {
    /// Advance the hold/cook timers. Returns true on the tick the mascot
    /// finishes cooking (the hit cue plays once).
    pub fn advance(&mut self, held: bool, dt: f32, cook_hold: f32, cooked_for: f32) -> bool {
        if held {
            self.holding = true;
            self.hold_time += dt;
        } else {
            self.holding = false;
            self.hold_time = 0.0;
        }

        let mut cooked_now = false;
        if self.holding && self.hold_time >= cook_hold && !self.cooked {
            self.cooked = true;
            self.cooked_time = 0.0;
            cooked_now = true;
        }

        if self.cooked {
            self.cooked_time += dt;
            if self.cooked_time >= cooked_for {
                self.cooked = false;
                self.hold_time = 0.0;
            }
        }

        cooked_now
    }
}

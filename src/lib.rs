//! Chicken Shooter Arcade - core game logic
//!
//! Core modules:
//! - `sim`: deterministic simulation (entities, spawning, screens, tick)
//! - `audio`: playlist manager and sound-effect bank behind trait seams
//! - `tuning`: data-driven game balance
//! - `settings`: user preferences
//!
//! Rendering, asset decoding and raw input capture live in front ends;
//! everything here is headless and drives through [`sim::tick`].

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (nominal 30 Hz tick)
    pub const TICK_DT: f32 = 1.0 / 30.0;
    /// Maximum catch-up steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default playfield dimensions for headless runs
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Ground band height as a fraction of playfield height; taps inside
    /// the band belong to the ground, not the play area
    pub const GROUND_BAND_FRACTION: f32 = 0.083;
    /// Target sprite height as a fraction of playfield height
    pub const CHICKEN_HEIGHT_FRACTION: f32 = 0.13;
}

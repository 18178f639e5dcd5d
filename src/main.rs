//! Chicken Shooter entry point
//!
//! Headless demo driver: runs the scripted loading sequence, starts a round,
//! lets a simple auto-tapper play for a while, and prints a summary. Real
//! front ends (renderer + pointer input) drive the same [`sim::tick`] API
//! with a real `TrackSource` behind the audio manager.

use std::path::Path;

use glam::Vec2;

use chicken_shooter::audio::{
    self, MusicPlayer, NullSource, SfxBank, SfxCue,
};
use chicken_shooter::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TICK_DT};
use chicken_shooter::settings::Settings;
use chicken_shooter::sim::{
    self, ChickenState, GameEvent, GameState, MenuAction, Playfield, Screen, TickInput,
};

fn main() {
    env_logger::init();
    log::info!("Chicken Shooter (headless demo) starting...");

    let settings = Settings::load(Path::new(Settings::DEFAULT_PATH));
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed: {seed}");

    let mut state = GameState::new(seed, Playfield::headless(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    state.difficulty = settings.difficulty;

    // No audio device in a headless run; every load no-ops quietly
    let mut music = MusicPlayer::new(
        NullSource,
        audio::menu_playlist(),
        audio::gameplay_playlist(),
        seed,
    );
    music.set_volume(settings.music_volume);
    let mut sfx = SfxBank::load(&mut NullSource, &audio::sfx_ids(), settings.sfx_volume);

    // Scripted loading runs to the menu on its own
    while state.screen == Screen::Loading {
        step(&mut state, &mut music, &mut sfx, TickInput::default());
    }

    step(
        &mut state,
        &mut music,
        &mut sfx,
        TickInput {
            action: Some(MenuAction::Start),
            ..Default::default()
        },
    );

    // Auto-play for up to 60 seconds of simulated time
    let ticks = (60.0 / TICK_DT) as u64;
    let mut taps = 0u32;
    for t in 0..ticks {
        if state.screen != Screen::Playing {
            break;
        }
        // Tap an ascending target every few ticks, like a mediocre player
        let tap = if t % 9 == 0 { aim(&state) } else { None };
        if tap.is_some() {
            taps += 1;
        }
        step(&mut state, &mut music, &mut sfx, TickInput { tap, ..Default::default() });
    }

    println!(
        "demo finished on {}: score {} with {} taps, misses {}/{}",
        state.difficulty.as_str(),
        state.score,
        taps,
        state.misses,
        state.miss_cap(),
    );
}

/// One frame: simulate, then feed the audio layer
fn step(
    state: &mut GameState,
    music: &mut MusicPlayer<NullSource>,
    sfx: &mut SfxBank,
    input: TickInput,
) {
    sim::tick(state, &input, TICK_DT);
    music.observe_screen(state.screen);
    music.poll();
    for event in state.drain_events() {
        match event {
            GameEvent::Jump => sfx.play(SfxCue::Jump),
            GameEvent::Hit => sfx.play(SfxCue::Hit),
            GameEvent::Failed => sfx.play(SfxCue::Failed),
        }
    }
}

/// Center of the first target still on the way up and clear of the ground
fn aim(state: &GameState) -> Option<Vec2> {
    state
        .chickens
        .iter()
        .find(|c| {
            c.state == ChickenState::Jumping
                && c.jump_phase < std::f32::consts::FRAC_PI_2
                && c.pos.y > state.playfield.ground_band
        })
        .map(|c| c.pos + state.playfield.chicken_size * 0.5)
}

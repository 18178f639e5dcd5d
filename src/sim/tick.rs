//! Fixed timestep simulation tick
//!
//! One entry point advances the whole game: the screen state machine, the
//! spawn scheduler, entity physics, tap resolution and the end-of-round
//! check. The driving loop calls [`tick`] from a single thread at a nominal
//! 30 Hz; ticks must never overlap.

use glam::Vec2;

use super::collision::{tap_in_play_area, tap_target};
use super::screen::Screen;
use super::spawn::spawn_params;
use super::state::{ChickenState, GameEvent, GameState};

/// One tick of user intent, produced by the out-of-scope input/UI layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Gameplay tap in playfield coordinates
    pub tap: Option<Vec2>,
    /// Button activation already resolved by the UI layer
    pub action: Option<MenuAction>,
    /// Pointer currently held on the home mascot
    pub mascot_held: bool,
}

/// Semantic menu commands. Which button maps to which command is the UI
/// layer's business; illegal commands for the current screen are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    OpenSettings,
    OpenAbout,
    Back,
    Pause,
    Resume,
    ExitToHome,
    Retry,
    CycleDifficulty,
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // The loading screen runs its own scripted sequencer and nothing else
    if state.screen == Screen::Loading {
        let step = state.tuning.loading_step_interval;
        let delay = state.tuning.loading_finish_delay;
        if state.loading.advance(dt, step, delay) {
            state.screen = Screen::Home;
            log::info!("loading finished");
        }
        return;
    }

    if let Some(action) = input.action {
        apply_menu_action(state, action);
    }

    match state.screen {
        Screen::Home => {
            let cook_hold = state.tuning.mascot_cook_hold;
            let cooked_for = state.tuning.mascot_cooked_for;
            if state
                .mascot
                .advance(input.mascot_held, dt, cook_hold, cooked_for)
            {
                state.events.push(GameEvent::Hit);
            }
        }
        Screen::Playing => update_round(state, input, dt),
        // Paused keeps rendering the frozen frame; nothing advances
        _ => {}
    }
}

fn apply_menu_action(state: &mut GameState, action: MenuAction) {
    use MenuAction::*;

    match (state.screen, action) {
        (Screen::Home, Start) | (Screen::GameOver, Retry) => {
            state.reset_round();
            state.screen = Screen::Playing;
            log::info!("round started on {}", state.difficulty.as_str());
        }
        (Screen::Home, OpenSettings) => state.screen = Screen::Settings,
        (Screen::Home, OpenAbout) => state.screen = Screen::About,
        (Screen::Settings | Screen::GameOver, CycleDifficulty) => {
            state.difficulty = state.difficulty.cycled();
            log::info!("difficulty set to {}", state.difficulty.as_str());
        }
        (Screen::Settings | Screen::About, Back) => state.screen = Screen::Home,
        (Screen::Playing, Pause) => state.screen = Screen::Paused,
        (Screen::Paused, Resume) => state.screen = Screen::Playing,
        (Screen::Paused, ExitToHome) => {
            state.reset_round();
            state.screen = Screen::Home;
        }
        (Screen::GameOver, ExitToHome) => {
            state.reset_round();
            state.mascot = Default::default();
            state.screen = Screen::Home;
        }
        _ => {}
    }
}

/// One gameplay tick: scheduler, tap resolution, physics, sweep, end check
fn update_round(state: &mut GameState, input: &TickInput, dt: f32) {
    // Scheduler: spawn when the interval elapsed and there is room
    state.spawn_timer += dt;
    let params = spawn_params(state.difficulty, state.score, &state.tuning);
    if state.spawn_timer >= params.interval && state.chickens.len() < params.max_live {
        state.spawn_chicken();
        state.spawn_timer = 0.0;
    }

    // Tap resolution; at most one target per tap, first match wins
    if let Some(tap) = input.tap {
        if tap_in_play_area(tap, &state.playfield) {
            if let Some(i) = tap_target(&state.chickens, state.playfield.chicken_size, tap) {
                let chicken = &mut state.chickens[i];
                chicken.was_hit = true;
                chicken.state = ChickenState::Hit;
                state.score += 1;
                state.events.push(GameEvent::Hit);
            }
        }
    }

    // Entity physics
    let max_x = state.playfield.max_x();
    let mut jump_cues = 0u32;
    let mut missed = 0u32;
    for chicken in &mut state.chickens {
        let out = chicken.step(max_x);
        if out.jump_cue {
            jump_cues += 1;
        }
        if out.missed {
            missed += 1;
        }
    }
    for _ in 0..jump_cues {
        state.events.push(GameEvent::Jump);
    }

    state.misses += missed;
    if state.misses >= state.tuning.miss_cap && !state.fail_cue_played {
        state.fail_cue_played = true;
        state.events.push(GameEvent::Failed);
    }

    // Sweep finished targets; the round never runs dry
    state.chickens.retain(|c| c.state != ChickenState::Done);
    if state.chickens.is_empty() {
        state.spawn_chicken();
    }

    // Evaluated after entity updates so the transition matches the counts
    if state.misses >= state.tuning.miss_cap {
        state.screen = Screen::GameOver;
        log::info!(
            "round over: score {} misses {}/{}",
            state.score,
            state.misses,
            state.tuning.miss_cap
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use crate::sim::spawn::Difficulty;
    use crate::sim::state::{Chicken, Playfield};

    fn fresh() -> GameState {
        GameState::new(1234, Playfield::headless(800.0, 600.0))
    }

    fn pass_loading(state: &mut GameState) {
        for _ in 0..200 {
            if state.screen != Screen::Loading {
                break;
            }
            tick(state, &TickInput::default(), TICK_DT);
        }
        assert_eq!(state.screen, Screen::Home);
    }

    fn act(state: &mut GameState, action: MenuAction) {
        let input = TickInput {
            action: Some(action),
            ..Default::default()
        };
        tick(state, &input, TICK_DT);
    }

    fn playing(state: &mut GameState) {
        pass_loading(state);
        act(state, MenuAction::Start);
        assert_eq!(state.screen, Screen::Playing);
    }

    /// A target parked mid-arc at a known spot, for tap tests
    fn parked(id: u32, x: f32, y: f32) -> Chicken {
        Chicken {
            id,
            pos: Vec2::new(x, y),
            vx: 0.0,
            base_height: 0.0,
            jump_phase: 1.0,
            jump_amplitude: 300.0,
            jump_rate: 0.0,
            fall_rate: 5.0,
            state: ChickenState::Jumping,
            was_hit: false,
            jump_cue_played: true,
        }
    }

    #[test]
    fn test_loading_runs_to_home() {
        let mut state = fresh();
        assert_eq!(state.screen, Screen::Loading);
        tick(&mut state, &TickInput::default(), TICK_DT);
        assert_eq!(state.screen, Screen::Loading);
        pass_loading(&mut state);
        assert!(state.loading.progress() >= 1.0);
    }

    #[test]
    fn test_start_resets_round() {
        let mut state = fresh();
        playing(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.misses, 0);
        assert_eq!(state.chickens.len(), 1);
    }

    #[test]
    fn test_menu_navigation() {
        let mut state = fresh();
        pass_loading(&mut state);

        act(&mut state, MenuAction::OpenSettings);
        assert_eq!(state.screen, Screen::Settings);
        act(&mut state, MenuAction::Back);
        assert_eq!(state.screen, Screen::Home);

        act(&mut state, MenuAction::OpenAbout);
        assert_eq!(state.screen, Screen::About);
        act(&mut state, MenuAction::Back);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_illegal_actions_ignored() {
        let mut state = fresh();
        pass_loading(&mut state);
        act(&mut state, MenuAction::Resume);
        act(&mut state, MenuAction::Retry);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = fresh();
        playing(&mut state);
        act(&mut state, MenuAction::Pause);
        assert_eq!(state.screen, Screen::Paused);

        let before = state.chickens.clone();
        let timer = state.spawn_timer;
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), TICK_DT);
        }
        assert_eq!(state.chickens, before);
        assert_eq!(state.spawn_timer, timer);

        act(&mut state, MenuAction::Resume);
        assert_eq!(state.screen, Screen::Playing);
        tick(&mut state, &TickInput::default(), TICK_DT);
        assert_ne!(state.chickens, before);
    }

    #[test]
    fn test_exit_from_pause_resets() {
        let mut state = fresh();
        playing(&mut state);
        state.score = 5;
        act(&mut state, MenuAction::Pause);
        act(&mut state, MenuAction::ExitToHome);
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_tap_hits_first_match_only() {
        let mut state = fresh();
        playing(&mut state);
        state.chickens = vec![parked(1, 100.0, 200.0), parked(2, 110.0, 210.0)];

        let input = TickInput {
            tap: Some(Vec2::new(120.0, 220.0)),
            ..Default::default()
        };
        tick(&mut state, &input, TICK_DT);

        assert_eq!(state.score, 1);
        assert_eq!(state.chickens[0].state, ChickenState::Hit);
        assert!(state.chickens[0].was_hit);
        assert_eq!(state.chickens[1].state, ChickenState::Jumping);
        assert!(state.drain_events().contains(&GameEvent::Hit));
    }

    #[test]
    fn test_tap_outside_changes_nothing() {
        let mut state = fresh();
        playing(&mut state);
        state.chickens = vec![parked(1, 100.0, 200.0)];

        let input = TickInput {
            tap: Some(Vec2::new(700.0, 500.0)),
            ..Default::default()
        };
        tick(&mut state, &input, TICK_DT);

        assert_eq!(state.score, 0);
        assert_eq!(state.chickens[0].state, ChickenState::Jumping);
    }

    #[test]
    fn test_tap_in_ground_band_ignored() {
        let mut state = fresh();
        playing(&mut state);
        state.chickens = vec![parked(1, 100.0, 0.0)];

        // The box straddles the band, but the tap itself is inside it
        let input = TickInput {
            tap: Some(Vec2::new(120.0, 10.0)),
            ..Default::default()
        };
        tick(&mut state, &input, TICK_DT);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_collection_never_runs_dry() {
        let mut state = fresh();
        playing(&mut state);

        // Force the lone target to finish its arc unhit this tick
        state.chickens[0].jump_phase = 3.1;
        state.chickens[0].jump_rate = 0.1;
        tick(&mut state, &TickInput::default(), TICK_DT);

        assert_eq!(state.misses, 1);
        assert!(!state.chickens.is_empty());
        assert_eq!(state.chickens[0].state, ChickenState::Jumping);
    }

    #[test]
    fn test_miss_cap_ends_round_with_one_fail_cue() {
        let mut state = fresh();
        playing(&mut state);
        state.tuning.miss_cap = 2;

        state.chickens = vec![parked(1, 100.0, 200.0), parked(2, 300.0, 200.0)];
        for c in &mut state.chickens {
            c.jump_phase = 3.1;
            c.jump_rate = 0.1;
        }
        tick(&mut state, &TickInput::default(), TICK_DT);

        assert_eq!(state.misses, 2);
        assert_eq!(state.screen, Screen::GameOver);
        let events = state.drain_events();
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::Failed).count(),
            1
        );

        // Retry rearms the cue for the next round
        act(&mut state, MenuAction::Retry);
        assert_eq!(state.screen, Screen::Playing);
        assert!(!state.fail_cue_played);
        assert_eq!(state.score, 0);
        assert_eq!(state.misses, 0);
        assert_eq!(state.chickens.len(), 1);
    }

    #[test]
    fn test_difficulty_survives_round_reset() {
        let mut state = fresh();
        pass_loading(&mut state);

        act(&mut state, MenuAction::OpenSettings);
        act(&mut state, MenuAction::CycleDifficulty); // Medium -> Hard
        assert_eq!(state.difficulty, Difficulty::Hard);
        act(&mut state, MenuAction::Back);

        act(&mut state, MenuAction::Start);
        assert_eq!(state.difficulty, Difficulty::Hard);

        state.tuning.miss_cap = 1;
        state.chickens = vec![parked(1, 100.0, 200.0)];
        state.chickens[0].jump_phase = 3.1;
        state.chickens[0].jump_rate = 0.1;
        tick(&mut state, &TickInput::default(), TICK_DT);
        assert_eq!(state.screen, Screen::GameOver);
        assert_eq!(state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_spawn_scheduler_respects_interval_and_cap() {
        let mut state = fresh();
        playing(&mut state);
        state.difficulty = Difficulty::Medium; // cap 2, interval 1.5 s at score 0
        state.chickens = vec![parked(1, 100.0, 200.0)]; // never finishes its arc

        // Just under the interval: no spawn
        let ticks_short = (1.4 / TICK_DT) as u32;
        for _ in 0..ticks_short {
            tick(&mut state, &TickInput::default(), TICK_DT);
        }
        assert_eq!(state.chickens.len(), 1);

        // Crossing it: one spawn, then the cap holds at 2
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), TICK_DT);
        }
        assert_eq!(state.chickens.len(), 2);

        let ticks_long = (3.0 / TICK_DT) as u32;
        for _ in 0..ticks_long {
            tick(&mut state, &TickInput::default(), TICK_DT);
        }
        assert!(state.chickens.len() <= 2);
    }

    #[test]
    fn test_jump_cue_once_per_spawned_target() {
        let mut state = fresh();
        playing(&mut state);

        tick(&mut state, &TickInput::default(), TICK_DT);
        let jumps = state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::Jump)
            .count();
        assert_eq!(jumps, 1);

        tick(&mut state, &TickInput::default(), TICK_DT);
        let jumps = state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::Jump)
            .count();
        assert_eq!(jumps, 0);
    }

    #[test]
    fn test_determinism() {
        let script = |state: &mut GameState| {
            playing(state);
            for i in 0..300u32 {
                let tap = if i % 7 == 0 {
                    state
                        .chickens
                        .first()
                        .map(|c| c.pos + state.playfield.chicken_size * 0.5)
                } else {
                    None
                };
                let input = TickInput {
                    tap,
                    ..Default::default()
                };
                tick(state, &input, TICK_DT);
            }
        };

        let mut a = GameState::new(99999, Playfield::headless(800.0, 600.0));
        let mut b = GameState::new(99999, Playfield::headless(800.0, 600.0));
        script(&mut a);
        script(&mut b);

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.misses, b.misses);
        assert_eq!(a.chickens, b.chickens);
    }
}

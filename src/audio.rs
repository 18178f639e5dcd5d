//! Audio playlist manager and sound-effect bank
//!
//! The core never touches an audio device. Tracks arrive through the
//! [`TrackSource`]/[`Track`] seams; a missing device or failed load yields
//! `None` and every operation downstream of it is a quiet no-op.
//!
//! Track handles fire their completion signal on *any* stop, natural end or
//! manual `stop()` alike. Every teardown path here therefore releases a
//! handle in a fixed order: unbind, then stop, then drop. Stopping first
//! would let the completion fire mid-teardown and schedule an extra
//! `play_next`.

use std::cell::Cell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::Screen;

/// Identifier for a music track or effect asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

/// Shared completion signal: the track sets it, the player polls it.
/// Single-threaded by construction.
pub type CompletionFlag = Rc<Cell<bool>>;

/// A loaded, playable track - the external sound handle
pub trait Track {
    fn play(&mut self);
    fn stop(&mut self);
    /// Volume in [0, 1]
    fn set_volume(&mut self, volume: f32);
    /// Attach the completion signal. Implementations set the flag whenever
    /// playback stops while bound.
    fn bind(&mut self, on_complete: CompletionFlag);
    /// Detach the completion signal; later stops are silent
    fn unbind(&mut self);
}

/// Loads tracks by id; `None` when the device or codec is unavailable
pub trait TrackSource {
    fn load(&mut self, id: &TrackId) -> Option<Box<dyn Track>>;
}

/// Source for headless runs: every load "fails", exercising the silent path
pub struct NullSource;

impl TrackSource for NullSource {
    fn load(&mut self, _id: &TrackId) -> Option<Box<dyn Track>> {
        None
    }
}

/// Logical playlist grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioMode {
    Menu,
    Gameplay,
}

impl AudioMode {
    /// Playlist grouping for a screen; `None` leaves the current music
    /// running (pause and game-over keep whatever was playing).
    pub fn for_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Home | Screen::Settings | Screen::About => Some(AudioMode::Menu),
            Screen::Playing => Some(AudioMode::Gameplay),
            Screen::Loading | Screen::Paused | Screen::GameOver => None,
        }
    }
}

/// Playlist ids matching the shipped asset layout
pub fn menu_playlist() -> Vec<TrackId> {
    (1..=3).map(|i| TrackId::new(format!("sounds/menu{i}.mp3"))).collect()
}

pub fn gameplay_playlist() -> Vec<TrackId> {
    (1..=10).map(|i| TrackId::new(format!("sounds/game{i}.mp3"))).collect()
}

/// Effect assets in [`SfxCue`] order
pub fn sfx_ids() -> [TrackId; 3] {
    [
        TrackId::new("sounds/jump.wav"),
        TrackId::new("sounds/hit.wav"),
        TrackId::new("sounds/failed.wav"),
    ]
}

/// Shuffle-loop playlist manager bound to the screen state machine
pub struct MusicPlayer<S: TrackSource> {
    source: S,
    menu_playlist: Vec<TrackId>,
    gameplay_playlist: Vec<TrackId>,
    playlist: Vec<TrackId>,
    current: Option<Box<dyn Track>>,
    current_index: Option<usize>,
    completion: CompletionFlag,
    volume: f32,
    mode: Option<AudioMode>,
    rng: Pcg32,
}

impl<S: TrackSource> MusicPlayer<S> {
    pub fn new(source: S, menu: Vec<TrackId>, gameplay: Vec<TrackId>, seed: u64) -> Self {
        Self {
            source,
            menu_playlist: menu,
            gameplay_playlist: gameplay,
            playlist: Vec::new(),
            current: None,
            current_index: None,
            completion: CompletionFlag::default(),
            volume: 0.5,
            mode: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn mode(&self) -> Option<AudioMode> {
        self.mode
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Clamp and apply immediately to the playing track, if any
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(track) = self.current.as_mut() {
            track.set_volume(self.volume);
        }
    }

    /// Release the live handle: unbind first so the stop below cannot fire
    /// the completion signal, then stop, then drop.
    fn release_current(&mut self) {
        if let Some(mut track) = self.current.take() {
            track.unbind();
            track.stop();
        }
    }

    /// Advance to a random track, optionally adopting a new playlist first.
    /// Bounded retries avoid repeating the previous index; a one-track
    /// playlist legitimately repeats.
    pub fn play_next(&mut self, playlist: Option<&[TrackId]>) {
        if let Some(p) = playlist {
            self.playlist = p.to_vec();
        }
        if self.playlist.is_empty() {
            return;
        }

        let prev = self.current_index;
        let mut next = prev;
        let mut attempts = 0;
        while next == prev && attempts < 10 {
            next = Some(self.rng.random_range(0..self.playlist.len()));
            attempts += 1;
        }
        let next = next.unwrap_or(0);
        self.current_index = Some(next);

        self.release_current();

        let id = self.playlist[next].clone();
        match self.source.load(&id) {
            Some(mut track) => {
                track.set_volume(self.volume);
                self.completion.set(false);
                track.bind(self.completion.clone());
                track.play();
                self.current = Some(track);
            }
            None => log::debug!("track unavailable: {}", id.0),
        }
    }

    /// Poll the completion signal; advances when the bound track finished.
    /// Call once per tick.
    pub fn poll(&mut self) {
        if self.completion.replace(false) {
            self.play_next(None);
        }
    }

    /// Switch playlist groups. Idempotent: the current mode is a no-op.
    pub fn switch_mode(&mut self, mode: AudioMode) {
        if self.mode == Some(mode) {
            return;
        }
        self.release_current();
        self.current_index = None;
        self.mode = Some(mode);
        log::debug!("music mode: {mode:?}");
        let playlist = match mode {
            AudioMode::Menu => self.menu_playlist.clone(),
            AudioMode::Gameplay => self.gameplay_playlist.clone(),
        };
        self.play_next(Some(&playlist));
    }

    /// Observe the screen each tick; crossing a menu/gameplay boundary
    /// swaps playlists, every other transition leaves the music running.
    pub fn observe_screen(&mut self, screen: Screen) {
        if let Some(mode) = AudioMode::for_screen(screen) {
            self.switch_mode(mode);
        }
    }
}

/// One-shot gameplay cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxCue {
    Jump,
    Hit,
    Failed,
}

impl SfxCue {
    pub const ALL: [SfxCue; 3] = [SfxCue::Jump, SfxCue::Hit, SfxCue::Failed];

    /// Per-cue trim applied on top of the effects volume
    fn gain(self) -> f32 {
        match self {
            SfxCue::Jump => 0.6,
            SfxCue::Hit => 1.2,
            SfxCue::Failed => 1.1,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The three one-shot effect cues, loaded once and retriggered
pub struct SfxBank {
    tracks: [Option<Box<dyn Track>>; 3],
    volume: f32,
}

impl SfxBank {
    /// Load every cue; unavailable ones simply stay silent
    pub fn load(source: &mut impl TrackSource, ids: &[TrackId; 3], volume: f32) -> Self {
        let mut bank = Self {
            tracks: [
                source.load(&ids[0]),
                source.load(&ids[1]),
                source.load(&ids[2]),
            ],
            volume: 0.0,
        };
        bank.set_volume(volume);
        bank
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Clamp and retrim every loaded cue
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        for cue in SfxCue::ALL {
            if let Some(track) = self.tracks[cue.index()].as_mut() {
                track.set_volume((cue.gain() * self.volume).clamp(0.0, 1.0));
            }
        }
    }

    pub fn play(&mut self, cue: SfxCue) {
        if let Some(track) = self.tracks[cue.index()].as_mut() {
            track.play();
        }
    }
}

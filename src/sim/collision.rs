//! Tap hit-testing
//!
//! Maps a pointer coordinate to the first live target whose bounding box
//! contains it. Coordinates share the entity space: origin bottom-left,
//! y up, same units as [`super::state::Playfield`].

use glam::Vec2;

use super::state::{Chicken, ChickenState, Playfield};

/// Axis-aligned bounding box: min corner plus size, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.min.x + self.size.x
            && point.y >= self.min.y
            && point.y <= self.min.y + self.size.y
    }
}

/// True when a tap lands in the playable region, above the ground band
pub fn tap_in_play_area(tap: Vec2, playfield: &Playfield) -> bool {
    tap.y > playfield.ground_band
}

/// Index of the first jumping target containing the tap, in iteration
/// order. Targets already hit (or done) are transparent to taps.
pub fn tap_target(chickens: &[Chicken], sprite: Vec2, tap: Vec2) -> Option<usize> {
    chickens
        .iter()
        .position(|c| c.state == ChickenState::Jumping && c.bounds(sprite).contains(tap))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken_at(x: f32, y: f32, state: ChickenState) -> Chicken {
        Chicken {
            id: 1,
            pos: Vec2::new(x, y),
            vx: 0.0,
            base_height: 0.0,
            jump_phase: 1.0,
            jump_amplitude: 200.0,
            jump_rate: 0.05,
            fall_rate: 5.0,
            state,
            was_hit: false,
            jump_cue_played: true,
        }
    }

    const SPRITE: Vec2 = Vec2::new(60.0, 80.0);

    #[test]
    fn test_aabb_contains_edges() {
        let b = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(60.0, 80.0));
        assert!(b.contains(Vec2::new(10.0, 20.0)));
        assert!(b.contains(Vec2::new(70.0, 100.0)));
        assert!(b.contains(Vec2::new(40.0, 60.0)));
        assert!(!b.contains(Vec2::new(9.9, 60.0)));
        assert!(!b.contains(Vec2::new(40.0, 100.1)));
    }

    #[test]
    fn test_first_match_wins() {
        let chickens = vec![
            chicken_at(100.0, 100.0, ChickenState::Jumping),
            chicken_at(110.0, 110.0, ChickenState::Jumping),
        ];
        // Tap inside both boxes resolves to the earlier target only
        let hit = tap_target(&chickens, SPRITE, Vec2::new(120.0, 130.0));
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn test_falling_targets_are_transparent() {
        let chickens = vec![
            chicken_at(100.0, 100.0, ChickenState::Hit),
            chicken_at(100.0, 100.0, ChickenState::Jumping),
        ];
        let hit = tap_target(&chickens, SPRITE, Vec2::new(120.0, 130.0));
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_tap_outside_all_boxes() {
        let chickens = vec![chicken_at(100.0, 100.0, ChickenState::Jumping)];
        assert_eq!(tap_target(&chickens, SPRITE, Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_ground_band_guard() {
        let playfield = Playfield::headless(800.0, 600.0);
        assert!(!tap_in_play_area(Vec2::new(400.0, 10.0), &playfield));
        assert!(tap_in_play_area(
            Vec2::new(400.0, playfield.ground_band + 1.0),
            &playfield
        ));
    }
}

//! Collision detection for the avatar
//!
//! Pipes are tested first, then the vertical bounds. The ceiling bound sits
//! well above the screen (`CEILING_Y`), so a bird can briefly fly off the
//! top; the floor bound is the top of the ground strip.

use super::geom::{Rect, World};
use super::state::{GameEvent, GameState, ObstaclePair};
use crate::consts::CEILING_Y;

/// What the avatar ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Overlapped a pipe of the pair with this id
    Obstacle { id: u32 },
    /// Flew too far above the screen
    Ceiling,
    /// Touched the ground
    Floor,
}

/// Pure check: first hit wins, pipes before bounds
pub fn detect<'a, I>(avatar: &Rect, obstacles: I, world: &World) -> Option<Collision>
where
    I: IntoIterator<Item = &'a ObstaclePair>,
{
    for pair in obstacles {
        if pair.rects().iter().any(|r| avatar.intersects(r)) {
            return Some(Collision::Obstacle { id: pair.id });
        }
    }
    if avatar.top() <= CEILING_Y {
        return Some(Collision::Ceiling);
    }
    if avatar.bottom() >= world.floor_y {
        return Some(Collision::Floor);
    }
    None
}

/// Run detection against the session and raise the hit sound on contact
pub fn check_collision(state: &mut GameState) -> bool {
    match detect(&state.avatar.rect, &state.obstacles, &state.world) {
        Some(hit) => {
            log::debug!("collision: {:?}", hit);
            state.emit(GameEvent::Hit);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::build_pair;

    #[test]
    fn test_clear_sky_no_collision() {
        let mut state = GameState::new(1);
        assert!(!check_collision(&mut state));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_pipe_overlap_hits() {
        let mut state = GameState::new(1);
        let world = state.world;
        // Lower pipe from y=300 to floor, avatar center at (50, 300)
        state.obstacles.push_back(build_pair(9, 40.0, 300.0, &world));
        let hit = detect(&state.avatar.rect, &state.obstacles, &world);
        assert_eq!(hit, Some(Collision::Obstacle { id: 9 }));
        assert!(check_collision(&mut state));
        assert_eq!(state.drain_events(), vec![GameEvent::Hit]);
    }

    #[test]
    fn test_passing_through_gap_is_safe() {
        let mut state = GameState::new(1);
        let world = state.world;
        // Gap spans y in [250, 400], avatar box spans [288, 312]
        state.obstacles.push_back(build_pair(2, 40.0, 400.0, &world));
        assert!(!check_collision(&mut state));
    }

    #[test]
    fn test_floor_hits_without_obstacles() {
        let mut state = GameState::new(1);
        state.avatar.rect.y = state.world.floor_y - state.avatar.rect.h;
        assert_eq!(
            detect(&state.avatar.rect, &state.obstacles, &state.world),
            Some(Collision::Floor)
        );
        state.avatar.rect.y -= 0.5;
        assert_eq!(
            detect(&state.avatar.rect, &state.obstacles, &state.world),
            None
        );
    }

    #[test]
    fn test_ceiling_margin() {
        let mut state = GameState::new(1);
        state.avatar.rect.y = -49.0;
        assert_eq!(
            detect(&state.avatar.rect, &state.obstacles, &state.world),
            None
        );
        state.avatar.rect.y = CEILING_Y;
        assert_eq!(
            detect(&state.avatar.rect, &state.obstacles, &state.world),
            Some(Collision::Ceiling)
        );
    }

    #[test]
    fn test_pipe_reported_before_floor() {
        let mut state = GameState::new(1);
        let world = state.world;
        state.avatar.rect.y = world.floor_y - 10.0;
        state.obstacles.push_back(build_pair(4, 40.0, 300.0, &world));
        assert_eq!(
            detect(&state.avatar.rect, &state.obstacles, &world),
            Some(Collision::Obstacle { id: 4 })
        );
    }
}

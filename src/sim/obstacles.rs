//! Obstacle pair generation, scrolling and despawn
//!
//! A pair is built from one random offset: the lower pipe's top edge. The
//! upper pipe ends exactly `PIPE_GAP` above it and reaches well past the
//! top of the screen.

use rand::Rng;

use super::geom::{Rect, World};
use super::state::{GameState, ObstaclePair};
use crate::consts::{GAP_OFFSETS, PIPE_DESPAWN_X, PIPE_GAP, PIPE_WIDTH};

/// Pick one of the permitted gap offsets, scaled to the world floor
pub fn choose_gap_offset<R: Rng>(rng: &mut R, world: &World) -> f32 {
    let idx = rng.random_range(0..GAP_OFFSETS.len());
    GAP_OFFSETS[idx] * world.gap_scale()
}

/// Build an obstacle pair whose lower pipe starts at `gap_offset`
pub fn build_pair(id: u32, x: f32, gap_offset: f32, world: &World) -> ObstaclePair {
    let floor = world.floor_y;
    ObstaclePair {
        id,
        upper: Rect::new(x, gap_offset - PIPE_GAP - floor, PIPE_WIDTH, floor),
        lower: Rect::new(x, gap_offset, PIPE_WIDTH, floor - gap_offset),
    }
}

/// Spawn a new pair just past the right edge of the world
pub fn spawn_pair(state: &mut GameState) -> u32 {
    let world = state.world;
    let gap_offset = choose_gap_offset(state.rng_mut(), &world);
    let id = state.next_entity_id();
    state
        .obstacles
        .push_back(build_pair(id, world.spawn_x(), gap_offset, &world));
    log::trace!("spawned pair {} with gap at {}", id, gap_offset);
    id
}

/// Scroll every pair left by the current speed
pub fn advance_all(state: &mut GameState, speed: f32) {
    for pair in state.obstacles.iter_mut() {
        pair.advance(speed);
    }
}

/// Drop pairs that have fully left the screen.
///
/// Pairs are kept in spawn order, so only the front can be off-screen.
pub fn despawn_offscreen(state: &mut GameState) -> usize {
    let mut removed = 0;
    while let Some(front) = state.obstacles.front() {
        if front.right() >= PIPE_DESPAWN_X {
            break;
        }
        if let Some(pair) = state.obstacles.pop_front() {
            state.score.forget(pair.id);
            removed += 1;
        }
    }
    removed
}

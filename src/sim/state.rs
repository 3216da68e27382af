//! Game state and core simulation types
//!
//! One `GameState` holds everything a run needs. The tick driver mutates it
//! in place; hosts only read it (through `FrameView`) and drain its events.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::geom::{Rect, World};
use super::score::ScoreBoard;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, floor drifting, waiting for the first activate
    Start,
    /// Run in progress
    Active,
    /// Crashed; world frozen until activate
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Active => "active",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Side effects raised during a tick, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Flap impulse applied (also fired when a run starts)
    Jump,
    /// An obstacle pair was credited
    Score,
    /// The avatar crashed
    Hit,
    /// Phase transition, carries the new phase
    PhaseChanged(GamePhase),
}

/// The player-controlled bird
#[derive(Debug, Clone)]
pub struct Avatar {
    /// Bounding box; x never changes during a run
    pub rect: Rect,
    /// Vertical velocity (units/tick, positive = falling)
    pub velocity: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(AVATAR_X, AVATAR_START_Y),
                AVATAR_WIDTH,
                AVATAR_HEIGHT,
            ),
            velocity: 0.0,
        }
    }
}

impl Avatar {
    /// Put the bird back at its spawn point, at rest
    pub fn reset(&mut self) {
        self.rect.set_center(Vec2::new(AVATAR_X, AVATAR_START_Y));
        self.velocity = 0.0;
    }

    /// Sprite rotation in degrees (counter-clockwise positive): nose up
    /// while rising, nose down while falling
    pub fn tilt_degrees(&self) -> f32 {
        -self.velocity * TILT_PER_VELOCITY
    }
}

/// An upper/lower pipe pair sharing one gap
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub id: u32,
    /// Hangs from above the screen down to the gap
    pub upper: Rect,
    /// Rises from the floor up to the gap
    pub lower: Rect,
}

impl ObstaclePair {
    /// Shared left edge of both pipes
    pub fn x(&self) -> f32 {
        self.lower.left()
    }

    pub fn right(&self) -> f32 {
        self.lower.right()
    }

    pub fn center_x(&self) -> f32 {
        self.lower.center_x()
    }

    /// Vertical middle of the passable gap
    pub fn gap_center_y(&self) -> f32 {
        (self.upper.bottom() + self.lower.top()) / 2.0
    }

    /// Scroll both pipes left by `speed`
    pub fn advance(&mut self, speed: f32) {
        self.upper.translate_x(-speed);
        self.lower.translate_x(-speed);
    }

    pub fn rects(&self) -> [&Rect; 2] {
        [&self.upper, &self.lower]
    }
}

/// Complete game session (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Playfield dimensions
    pub world: World,
    /// Current phase
    pub phase: GamePhase,
    /// Player avatar
    pub avatar: Avatar,
    /// Live obstacle pairs, spawn order = left-to-right order
    pub obstacles: VecDeque<ObstaclePair>,
    /// Score, best score and credited pair ids
    pub score: ScoreBoard,
    /// Scroll speed and spawn timer
    pub difficulty: Difficulty,
    /// Floor strip scroll offset in (-world.width, 0]
    pub floor_offset: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session on the reference 400x600 world
    pub fn new(seed: u64) -> Self {
        Self::with_world(seed, World::default())
    }

    pub fn with_world(seed: u64, world: World) -> Self {
        Self {
            seed,
            world,
            phase: GamePhase::Start,
            avatar: Avatar::default(),
            obstacles: VecDeque::new(),
            score: ScoreBoard::default(),
            difficulty: Difficulty::default(),
            floor_offset: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Switch phase and announce it
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase == phase {
            return;
        }
        log::debug!("phase {} -> {}", self.phase.as_str(), phase.as_str());
        self.phase = phase;
        self.emit(GameEvent::PhaseChanged(phase));
    }

    /// Fresh run: bird home, no pipes, zero score, base speed
    pub fn reset_run(&mut self) {
        self.avatar.reset();
        self.obstacles.clear();
        self.score.reset_run();
        self.difficulty.reset();
    }

    /// Scroll the floor strip, wrapping after one full screen width
    pub fn scroll_floor(&mut self, speed: f32) {
        self.floor_offset -= speed;
        if self.floor_offset <= -self.world.width {
            self.floor_offset = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_title_screen() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.avatar.rect.center(), Vec2::new(AVATAR_X, AVATAR_START_Y));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score.current, 0);
        assert_eq!(state.difficulty.speed, BASE_SPEED);
    }

    #[test]
    fn test_set_phase_emits_once() {
        let mut state = GameState::new(7);
        state.set_phase(GamePhase::Active);
        state.set_phase(GamePhase::Active);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged(GamePhase::Active)]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_floor_wraps_after_one_screen() {
        let mut state = GameState::new(7);
        state.floor_offset = -398.0;
        state.scroll_floor(3.0);
        assert_eq!(state.floor_offset, 0.0);
        state.scroll_floor(3.0);
        assert_eq!(state.floor_offset, -3.0);
    }

    #[test]
    fn test_tilt_follows_velocity() {
        let mut avatar = Avatar::default();
        avatar.velocity = -6.0;
        assert_eq!(avatar.tilt_degrees(), 18.0);
        avatar.velocity = 2.0;
        assert_eq!(avatar.tilt_degrees(), -6.0);
    }
}

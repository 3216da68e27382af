//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (speeds and gravity are per tick)
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod geom;
pub mod obstacles;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Collision, check_collision, detect};
pub use difficulty::{Difficulty, ms_to_ticks, spawn_interval_for_speed};
pub use geom::{Rect, World};
pub use score::{ScoreBoard, award_passed};
pub use state::{Avatar, GameEvent, GamePhase, GameState, ObstaclePair};
pub use tick::{TickInput, handle_activate, tick};

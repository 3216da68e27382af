//! Rendering interface
//!
//! The simulation knows nothing about drawing. Each frame the host captures
//! a `FrameView` and hands it to a `Renderer` along with the asset catalog;
//! `shapes::build_frame` turns the pair into a flat draw list that any
//! backend can execute.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

use glam::Vec2;

use crate::assets::AssetCatalog;
use crate::sim::{GamePhase, GameState, Rect, World};

pub use shapes::{Primitive, TextSize, build_frame};

/// One pipe pair as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub upper: Rect,
    pub lower: Rect,
}

/// Read-only snapshot of everything drawn in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub phase: GamePhase,
    pub world: World,
    pub avatar: Rect,
    /// Sprite rotation in degrees, derived from vertical velocity
    pub avatar_tilt: f32,
    pub obstacles: Vec<ObstacleView>,
    /// Floor strip scroll offset
    pub floor_offset: f32,
    pub score: u32,
    pub best: u32,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            world: state.world,
            avatar: state.avatar.rect,
            avatar_tilt: state.avatar.tilt_degrees(),
            obstacles: state
                .obstacles
                .iter()
                .map(|pair| ObstacleView {
                    upper: pair.upper,
                    lower: pair.lower,
                })
                .collect(),
            floor_offset: state.floor_offset,
            score: state.score.current,
            best: state.score.best,
        }
    }

    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.world.width / 2.0, self.world.height / 2.0)
    }
}

/// Draws frames; implemented per host (canvas, log, tests)
pub trait Renderer {
    fn draw(&mut self, view: &FrameView, assets: &AssetCatalog);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, handle_activate, tick};

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(21);
        handle_activate(&mut state);
        for _ in 0..3 {
            tick(&mut state, &TickInput::default());
        }
        state.score.best = 4;

        let view = FrameView::capture(&state);
        assert_eq!(view.phase, GamePhase::Active);
        assert_eq!(view.avatar, state.avatar.rect);
        assert_eq!(view.avatar_tilt, -state.avatar.velocity * 3.0);
        assert_eq!(view.floor_offset, state.floor_offset);
        assert_eq!(view.obstacles.len(), state.obstacles.len());
        assert_eq!(view.best, 4);
        assert_eq!(view.screen_center(), Vec2::new(200.0, 300.0));
    }
}

//! Native (desktop) strategies for the core loop
//!
//! There is no window here: the native binary runs headless, paced in real
//! time, and reports progress through the log.

use std::time::{Duration, Instant};

use super::{FrameClock, FrameInput, InputSource};
use crate::assets::AssetCatalog;
use crate::consts::SIM_HZ;
use crate::renderer::{FrameView, Renderer};
use crate::sim::GamePhase;

/// Sleeps the thread so frames land at a fixed rate
pub struct SleepClock {
    frame: Duration,
    last: Instant,
}

impl Default for SleepClock {
    fn default() -> Self {
        Self::new(SIM_HZ)
    }
}

impl SleepClock {
    pub fn new(hz: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / hz.max(1),
            last: Instant::now(),
        }
    }
}

impl FrameClock for SleepClock {
    fn wait_frame(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if now < target {
            std::thread::sleep(target - now);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}

/// Headless input: never presses anything, quits after a frame budget
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: Option<u64>,
}

impl FrameBudget {
    /// `0` runs until the process is killed
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: (frames > 0).then_some(frames),
        }
    }
}

impl InputSource for FrameBudget {
    fn poll(&mut self) -> FrameInput {
        let quit = match self.remaining.as_mut() {
            Some(0) => true,
            Some(n) => {
                *n -= 1;
                false
            }
            None => false,
        };
        FrameInput {
            activate: false,
            quit,
        }
    }
}

/// Logs phase changes and score updates instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
    last_score: u32,
    runs: u32,
}

impl LogRenderer {
    pub fn runs(&self) -> u32 {
        self.runs
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, view: &FrameView, _assets: &AssetCatalog) {
        if self.last_phase != Some(view.phase) {
            match view.phase {
                GamePhase::Start => log::info!("Title screen (best {})", view.best),
                GamePhase::Active => {
                    self.runs += 1;
                    log::info!("Run {} under way", self.runs);
                }
                GamePhase::GameOver => {
                    log::info!("GAME OVER - Score: {} | Best: {}", view.score, view.best)
                }
            }
            self.last_phase = Some(view.phase);
        }
        if view.phase == GamePhase::Active && view.score != self.last_score {
            log::debug!("score {} ({} pipes on screen)", view.score, view.obstacles.len());
        }
        self.last_score = view.score;
    }
}

//! Score bookkeeping
//!
//! Tracks the running score, the best score of this process and which
//! obstacle pairs have already been credited. Nothing here is persisted.

use std::collections::HashSet;

use super::state::{GameEvent, GameState};

/// Running score, session best, and credited pair ids
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    /// Pairs passed this run
    pub current: u32,
    /// Best finished run since the process started
    pub best: u32,
    /// Ids of pairs already credited this run
    scored: HashSet<u32>,
}

impl ScoreBoard {
    /// New run: zero score, nothing credited. Best is kept.
    pub fn reset_run(&mut self) {
        self.current = 0;
        self.scored.clear();
    }

    pub fn is_scored(&self, id: u32) -> bool {
        self.scored.contains(&id)
    }

    pub fn scored_count(&self) -> usize {
        self.scored.len()
    }

    /// Credit a pair once; returns false if it was already credited
    pub fn credit(&mut self, id: u32) -> bool {
        if !self.scored.insert(id) {
            return false;
        }
        self.current += 1;
        true
    }

    /// Drop a despawned pair from the credited set
    pub fn forget(&mut self, id: u32) {
        self.scored.remove(&id);
    }

    /// Fold the current score into the best; true on a new best
    pub fn record_best(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            return true;
        }
        false
    }
}

/// Credit every ground-anchored pair whose center has passed the avatar.
///
/// Returns how many pairs were credited this call.
pub fn award_passed(state: &mut GameState) -> u32 {
    let avatar_x = state.avatar.rect.center_x();
    let floor_y = state.world.floor_y;

    let passed: Vec<u32> = state
        .obstacles
        .iter()
        .filter(|pair| pair.lower.bottom() >= floor_y && pair.center_x() < avatar_x)
        .map(|pair| pair.id)
        .collect();

    let mut credited = 0;
    for id in passed {
        if state.score.credit(id) {
            credited += 1;
            state.emit(GameEvent::Score);
        }
    }
    if credited > 0 {
        log::debug!("score {}", state.score.current);
    }
    credited
}

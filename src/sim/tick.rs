//! Fixed timestep simulation tick
//!
//! Core game loop step: applies the activate edge, then advances the world
//! according to the current phase.

use super::collision::check_collision;
use super::obstacles::{advance_all, despawn_offscreen, spawn_pair};
use super::physics;
use super::score::award_passed;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::IDLE_SCROLL_SPEED;

/// Autopilot flaps once its feet drop within this distance of the gap floor
const AUTOPILOT_FLAP_MARGIN: f32 = 20.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized activate event (key, click or tap)
    pub activate: bool,
    /// Attract/demo mode - the game plays itself
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    let activate = input.activate || (input.autopilot && autopilot_wants_activate(state));
    if activate {
        handle_activate(state);
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Start => {
            state.scroll_floor(IDLE_SCROLL_SPEED);
        }
        GamePhase::Active => step_active(state),
        GamePhase::GameOver => {}
    }
}

/// Apply one activate event to the state machine
pub fn handle_activate(state: &mut GameState) {
    match state.phase {
        GamePhase::Start => {
            state.reset_run();
            physics::flap(&mut state.avatar);
            state.set_phase(GamePhase::Active);
            state.emit(GameEvent::Jump);
            log::info!("Run started (best so far: {})", state.score.best);
        }
        GamePhase::Active => {
            physics::flap(&mut state.avatar);
            state.emit(GameEvent::Jump);
        }
        GamePhase::GameOver => {
            // Run fields are reset on the next start -> active edge
            state.set_phase(GamePhase::Start);
        }
    }
}

fn step_active(state: &mut GameState) {
    if state.difficulty.tick_spawn_timer() {
        spawn_pair(state);
    }
    state.difficulty.ramp();

    physics::integrate(&mut state.avatar);

    // Pipes and floor share one speed so they scroll in lockstep
    let speed = state.difficulty.speed;
    advance_all(state, speed);
    state.scroll_floor(speed);

    let crashed = check_collision(state);
    award_passed(state);
    despawn_offscreen(state);

    if crashed {
        end_run(state);
    }
}

fn end_run(state: &mut GameState) {
    let new_best = state.score.record_best();
    state.set_phase(GamePhase::GameOver);
    log::info!(
        "Game over: score {} (best {}{})",
        state.score.current,
        state.score.best,
        if new_best { ", new best" } else { "" }
    );
}

/// Demo-mode decision: would a player press activate this tick?
fn autopilot_wants_activate(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Active => {
            let avatar = &state.avatar;
            if avatar.velocity < 0.0 {
                return false;
            }
            // Aim for the first pair the bird has not fully cleared
            let gap_floor = state
                .obstacles
                .iter()
                .find(|pair| pair.right() > avatar.rect.left())
                .map(|pair| pair.lower.top())
                .unwrap_or(state.world.floor_y - crate::consts::PIPE_GAP);
            avatar.rect.bottom() >= gap_floor - AUTOPILOT_FLAP_MARGIN
        }
    }
}

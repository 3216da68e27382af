//! Platform abstraction layer
//!
//! One core loop for every host. Entry points inject:
//! - an `InputSource` (keys, pointer, touch, or a script)
//! - a `FrameClock`, the cooperative yield point between frames
//! - a `Renderer` and an audio backend
//!
//! The browser cannot block, so it drives `Runner::frame` from
//! `requestAnimationFrame` instead of calling `run`.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use crate::assets::AssetCatalog;
use crate::audio::AudioManager;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{FrameView, Renderer};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Longest frame the accumulator will accept (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Normalized input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Any activate source fired (space, enter, click, tap)
    pub activate: bool,
    /// Window closed / process asked to stop
    pub quit: bool,
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Activate,
    ToggleAutopilot,
    Ignore,
}

/// Map a key-down event to an action. Auto-repeat events from a held key
/// are ignored: one press is one activate.
pub fn key_action(key: &str, repeat: bool) -> KeyAction {
    if repeat {
        return KeyAction::Ignore;
    }
    match key {
        " " | "Enter" => KeyAction::Activate,
        "i" | "I" => KeyAction::ToggleAutopilot,
        _ => KeyAction::Ignore,
    }
}

/// Produces one normalized input sample per frame
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Paces frames. `wait_frame` is where the loop yields to the host and
/// returns the seconds elapsed since the previous call.
pub trait FrameClock {
    fn wait_frame(&mut self) -> f32;
}

/// Fixed-timestep driver around one game session
#[derive(Debug, Clone)]
pub struct Runner {
    state: GameState,
    accumulator: f32,
    input: TickInput,
}

impl Runner {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    /// Queue an activate for the next simulation step. Several activates
    /// in one frame count once.
    pub fn queue_activate(&mut self) {
        self.input.activate = true;
    }

    /// Run as many 120 Hz steps as `dt` covers and return the events raised
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.activate = false;
        }
        if substeps == MAX_SUBSTEPS {
            // Too far behind: drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        self.state.drain_events()
    }

    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.state)
    }
}

/// The blocking game loop. Returns the number of frames run once the input
/// source asks to quit.
pub fn run(
    runner: &mut Runner,
    input: &mut dyn InputSource,
    clock: &mut dyn FrameClock,
    renderer: &mut dyn Renderer,
    audio: &mut AudioManager,
    assets: &AssetCatalog,
) -> u64 {
    let mut frames = 0;
    let mut dt = SIM_DT;
    loop {
        let sample = input.poll();
        if sample.quit {
            log::info!("Quit after {} frames", frames);
            return frames;
        }
        if sample.activate {
            runner.queue_activate();
        }

        let events = runner.frame(dt);
        audio.play_events(&events);
        renderer.draw(&runner.view(), assets);
        frames += 1;

        dt = clock.wait_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoAssets;
    use crate::sim::GamePhase;

    struct Steady;

    impl FrameClock for Steady {
        fn wait_frame(&mut self) -> f32 {
            SIM_DT
        }
    }

    /// Presses activate on the listed frames, quits after `limit`
    struct Script {
        frame: u64,
        limit: u64,
        presses: Vec<u64>,
    }

    impl InputSource for Script {
        fn poll(&mut self) -> FrameInput {
            let sample = FrameInput {
                activate: self.presses.contains(&self.frame),
                quit: self.frame >= self.limit,
            };
            self.frame += 1;
            sample
        }
    }

    #[derive(Default)]
    struct Recorder {
        phases: Vec<GamePhase>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, view: &FrameView, _assets: &AssetCatalog) {
            self.phases.push(view.phase);
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action(" ", false), KeyAction::Activate);
        assert_eq!(key_action("Enter", false), KeyAction::Activate);
        assert_eq!(key_action("i", false), KeyAction::ToggleAutopilot);
        assert_eq!(key_action("I", false), KeyAction::ToggleAutopilot);
        assert_eq!(key_action("x", false), KeyAction::Ignore);
    }

    #[test]
    fn test_held_key_repeats_are_ignored() {
        assert_eq!(key_action(" ", true), KeyAction::Ignore);
        assert_eq!(key_action("Enter", true), KeyAction::Ignore);
        assert_eq!(key_action("i", true), KeyAction::Ignore);

        // A held space bar: one press, then repeats
        let mut runner = Runner::new(GameState::new(1));
        let presses = [(" ", false), (" ", true), (" ", true), (" ", true)];
        let mut jumps = 0;
        for (key, repeat) in presses {
            if key_action(key, repeat) == KeyAction::Activate {
                runner.queue_activate();
            }
            jumps += runner
                .frame(SIM_DT)
                .iter()
                .filter(|e| **e == GameEvent::Jump)
                .count();
        }
        assert_eq!(jumps, 1);
    }

    #[test]
    fn test_one_step_per_sim_frame() {
        let mut runner = Runner::new(GameState::new(1));
        runner.frame(SIM_DT);
        assert_eq!(runner.state().time_ticks, 1);
        runner.frame(SIM_DT * 0.5);
        assert_eq!(runner.state().time_ticks, 1);
        runner.frame(SIM_DT * 0.5);
        assert_eq!(runner.state().time_ticks, 2);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut runner = Runner::new(GameState::new(1));
        runner.frame(5.0);
        assert_eq!(runner.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_activate_consumed_once() {
        let mut runner = Runner::new(GameState::new(1));
        runner.queue_activate();
        runner.queue_activate();
        let events = runner.frame(SIM_DT * 3.0);
        assert_eq!(runner.state().phase, GamePhase::Active);
        let jumps = events.iter().filter(|e| **e == GameEvent::Jump).count();
        assert_eq!(jumps, 1);
    }

    #[test]
    fn test_activate_waits_for_a_step() {
        let mut runner = Runner::new(GameState::new(1));
        runner.queue_activate();
        runner.frame(0.0);
        assert_eq!(runner.state().phase, GamePhase::Start);
        runner.frame(SIM_DT);
        assert_eq!(runner.state().phase, GamePhase::Active);
    }

    #[test]
    fn test_run_loop_until_quit() {
        let mut runner = Runner::new(GameState::new(5));
        let mut input = Script {
            frame: 0,
            limit: 30,
            presses: vec![2],
        };
        let mut renderer = Recorder::default();
        let mut audio = AudioManager::default();
        let assets = AssetCatalog::load(&NoAssets);

        let frames = run(
            &mut runner,
            &mut input,
            &mut Steady,
            &mut renderer,
            &mut audio,
            &assets,
        );

        assert_eq!(frames, 30);
        assert_eq!(renderer.phases.len(), 30);
        assert_eq!(renderer.phases[1], GamePhase::Start);
        assert_eq!(renderer.phases[2], GamePhase::Active);
        assert_eq!(runner.state().time_ticks, 30);
    }
}

//! Audio triggers and backends
//!
//! The simulation only raises `GameEvent`s; this module turns them into
//! sounds. A missing backend is fine: `NullAudio` swallows everything.
//! On the web, effects are synthesized with the Web Audio API, so no sound
//! files are needed there.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Flap (and run start)
    Jump,
    /// Obstacle pair passed
    Score,
    /// Crash
    Hit,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Jump, SoundEffect::Score, SoundEffect::Hit];

    /// Sound triggered by a simulation event, if any
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Score => Some(SoundEffect::Score),
            GameEvent::Hit => Some(SoundEffect::Hit),
            GameEvent::PhaseChanged(_) => None,
        }
    }

    /// File name looked up by asset resolvers
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Score => "score.wav",
            SoundEffect::Hit => "hit.wav",
        }
    }
}

/// Something that can make noise
pub trait AudioSink {
    /// Play an effect at the given volume (0.0 - 1.0, already mixed)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) {}
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(NullAudio))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioSink>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build a manager with volumes taken from settings
    pub fn with_settings(backend: Box<dyn AudioSink>, settings: &Settings) -> Self {
        let mut manager = Self::new(backend);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play the sounds for a frame's worth of events; returns how many fired
    pub fn play_events(&mut self, events: &[GameEvent]) -> usize {
        let mut played = 0;
        for effect in events.iter().filter_map(|e| SoundEffect::for_event(*e)) {
            self.play(effect);
            played += 1;
        }
        played
    }
}

/// Native backend: reports which effect would play and from which file
#[cfg(not(target_arch = "wasm32"))]
pub struct LogAudio {
    catalog: crate::assets::AssetCatalog,
}

#[cfg(not(target_arch = "wasm32"))]
impl LogAudio {
    pub fn new(catalog: crate::assets::AssetCatalog) -> Self {
        Self { catalog }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        // Effects without a file stay silent
        if let Some(path) = self.catalog.sound_path(effect) {
            log::debug!("play {} at {:.2}", path.display(), volume);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect};

    /// Procedural Web Audio backend
    #[derive(Clone)]
    pub struct WebAudio {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Jump - quick upward chirp
        fn play_jump(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(800.0, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.12).ok();
        }

        /// Score - two rising notes
        fn play_score(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [520.0, 680.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Hit - falling buzz
        fn play_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(80.0, t + 0.4)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.5).ok();
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect, vol: f32) {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Jump => self.play_jump(ctx, vol),
                SoundEffect::Score => self.play_score(ctx, vol),
                SoundEffect::Hit => self.play_hit(ctx, vol),
            }
        }
    }
}

//! Flippy Bird - a side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, game state)
//! - `renderer`: Frame snapshot and fallback primitive shapes
//! - `audio`: Sound effect triggers and backends
//! - `assets`: Optional image/sound lookup strategies
//! - `platform`: Input, clock and the host loop shared by native and web
//! - `settings`: JSON configuration

pub mod assets;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, AssetResolver};
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are world units (pixels in the reference 400x600 window),
/// velocities are units per tick.
pub mod consts {
    /// Fixed simulation rate
    pub const SIM_HZ: u32 = 120;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    pub const FLOOR_Y: f32 = 500.0;

    /// Avatar box and spawn point (center)
    pub const AVATAR_WIDTH: f32 = 34.0;
    pub const AVATAR_HEIGHT: f32 = 24.0;
    pub const AVATAR_X: f32 = 50.0;
    pub const AVATAR_START_Y: f32 = 300.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.25;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_VELOCITY: f32 = -6.0;
    /// Avatar top at or above this y counts as a crash
    pub const CEILING_Y: f32 = -50.0;

    /// Obstacle geometry
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Spawn this far past the right edge
    pub const PIPE_SPAWN_MARGIN: f32 = 20.0;
    /// Pairs whose right edge is left of this are dropped
    pub const PIPE_DESPAWN_X: f32 = -10.0;
    /// Permitted gap offsets (top of the lower pipe) for a 500-unit floor
    pub const GAP_OFFSETS: [f32; 5] = [200.0, 250.0, 300.0, 350.0, 400.0];
    /// Floor height the gap offsets were authored for
    pub const GAP_REFERENCE_FLOOR: f32 = 500.0;

    /// Scroll speed ramp
    pub const BASE_SPEED: f32 = 3.0;
    pub const MAX_SPEED: f32 = 8.0;
    pub const SPEED_RAMP: f32 = 0.002;

    /// Spawn interval (milliseconds)
    pub const BASE_SPAWN_MS: u32 = 1200;
    pub const MIN_SPAWN_MS: u32 = 600;
    pub const SPAWN_MS_PER_SPEED: f32 = 50.0;
    /// Timer is only reprogrammed past this difference
    pub const SPAWN_HYSTERESIS_MS: u32 = 50;

    /// Floor drift on the title screen
    pub const IDLE_SCROLL_SPEED: f32 = 1.0;
    /// Sprite tilt in degrees per unit of vertical velocity
    pub const TILT_PER_VELOCITY: f32 = 3.0;
}

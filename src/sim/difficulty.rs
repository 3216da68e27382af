//! Linear difficulty ramp and the obstacle spawn timer
//!
//! Scroll speed creeps up every active tick until it hits the cap. The spawn
//! interval follows speed, but the countdown is only re-armed when the new
//! interval moves past the hysteresis band.

use crate::consts::*;

/// Spawn interval for a given scroll speed, in [MIN_SPAWN_MS, BASE_SPAWN_MS]
pub fn spawn_interval_for_speed(speed: f32) -> u32 {
    let raw = BASE_SPAWN_MS as f32 - speed * SPAWN_MS_PER_SPEED;
    // `as` saturates, so negative and NaN land on 0 before the clamp
    (raw as u32).clamp(MIN_SPAWN_MS, BASE_SPAWN_MS)
}

/// Convert a millisecond interval to whole simulation ticks (at least one)
pub fn ms_to_ticks(ms: u32) -> u32 {
    let ticks = (ms as u64 * SIM_HZ as u64 + 500) / 1000;
    (ticks as u32).max(1)
}

/// Scroll speed and spawn timer for the current run
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Horizontal scroll per tick for pipes and floor
    pub speed: f32,
    /// Interval the spawn timer is currently armed with
    pub spawn_interval_ms: u32,
    /// Ticks left until the next spawn
    pub spawn_countdown: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            speed: BASE_SPEED,
            spawn_interval_ms: BASE_SPAWN_MS,
            spawn_countdown: ms_to_ticks(BASE_SPAWN_MS),
        }
    }
}

impl Difficulty {
    /// Back to base speed with a freshly armed timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the ramp by one tick.
    ///
    /// Returns true when the spawn timer was re-armed with a new interval.
    pub fn ramp(&mut self) -> bool {
        if self.speed >= MAX_SPEED {
            return false;
        }
        self.speed = (self.speed + SPEED_RAMP).min(MAX_SPEED);

        let interval = spawn_interval_for_speed(self.speed);
        if interval.abs_diff(self.spawn_interval_ms) > SPAWN_HYSTERESIS_MS {
            log::debug!(
                "spawn interval {}ms -> {}ms at speed {:.3}",
                self.spawn_interval_ms,
                interval,
                self.speed
            );
            self.spawn_interval_ms = interval;
            self.spawn_countdown = ms_to_ticks(interval);
            return true;
        }
        false
    }

    /// Count down one tick; true when a pair should spawn now
    pub fn tick_spawn_timer(&mut self) -> bool {
        self.spawn_countdown = self.spawn_countdown.saturating_sub(1);
        if self.spawn_countdown == 0 {
            self.spawn_countdown = ms_to_ticks(self.spawn_interval_ms);
            return true;
        }
        false
    }
}

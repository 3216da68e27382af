//! Vertical motion of the avatar
//!
//! Per-tick integration, not per-second: a slower host frame rate makes the
//! game feel slower. There is deliberately no terminal velocity.

use super::state::Avatar;
use crate::consts::{FLAP_VELOCITY, GRAVITY};

/// One tick of gravity: velocity first, then position
pub fn integrate(avatar: &mut Avatar) {
    avatar.velocity += GRAVITY;
    avatar.rect.y += avatar.velocity;
}

/// Upward impulse; replaces whatever velocity had accumulated
pub fn flap(avatar: &mut Avatar) {
    avatar.velocity = FLAP_VELOCITY;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flap_overrides_velocity() {
        let mut avatar = Avatar::default();
        avatar.velocity = 11.5;
        flap(&mut avatar);
        assert_eq!(avatar.velocity, FLAP_VELOCITY);
    }

    #[test]
    fn test_integrate_after_flap() {
        let mut avatar = Avatar::default();
        let y0 = avatar.rect.y;
        flap(&mut avatar);
        integrate(&mut avatar);
        assert_eq!(avatar.velocity, -5.75);
        assert_eq!(avatar.rect.y, y0 - 5.75);
    }

    #[test]
    fn test_no_terminal_velocity() {
        let mut avatar = Avatar::default();
        for _ in 0..400 {
            integrate(&mut avatar);
        }
        assert_eq!(avatar.velocity, 100.0);
    }

    proptest! {
        #[test]
        fn velocity_grows_by_gravity_each_tick(v0 in -20.0f32..20.0, ticks in 1usize..200) {
            let mut avatar = Avatar::default();
            avatar.velocity = v0;
            for _ in 0..ticks {
                let before = avatar.velocity;
                let y_before = avatar.rect.y;
                integrate(&mut avatar);
                prop_assert_eq!(avatar.velocity, before + GRAVITY);
                prop_assert_eq!(avatar.rect.y, y_before + avatar.velocity);
            }
        }
    }
}

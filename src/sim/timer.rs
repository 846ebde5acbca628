//! Run countdown
//!
//! Elapsed wall-clock time is accumulated across ticks and one second is taken off
//! the countdown for every whole second accumulated. Irregular tick cadence can
//! neither skip nor double-count a second.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    limit_secs: u32,
    remaining_secs: u32,
    /// Elapsed time not yet converted into a whole-second decrement
    carry: f32,
}

impl Countdown {
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            remaining_secs: limit_secs,
            carry: 0.0,
        }
    }

    /// Advance by `dt` seconds of real time. Returns true once the countdown is at zero.
    pub fn advance(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.carry += dt;
        }
        while self.carry >= 1.0 && self.remaining_secs > 0 {
            self.carry -= 1.0;
            self.remaining_secs -= 1;
        }
        if self.remaining_secs == 0 {
            self.carry = 0.0;
        }
        self.is_expired()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn limit_secs(&self) -> u32 {
        self.limit_secs
    }

    /// Whole seconds used so far
    pub fn elapsed_secs(&self) -> u32 {
        self.limit_secs - self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;

    #[test]
    fn test_decrements_once_per_second() {
        let mut timer = Countdown::new(30);
        for _ in 0..59 {
            timer.advance(FRAME_DT);
        }
        assert_eq!(timer.remaining_secs(), 30);
        // Float accumulation of 1/60 may land just under 1.0, allow a couple more frames
        for _ in 0..3 {
            timer.advance(FRAME_DT);
        }
        assert_eq!(timer.remaining_secs(), 29);
        assert_eq!(timer.elapsed_secs(), 1);
    }

    #[test]
    fn test_long_frame_catches_up() {
        let mut timer = Countdown::new(30);
        assert!(!timer.advance(2.5));
        assert_eq!(timer.remaining_secs(), 28);
        timer.advance(0.5);
        assert_eq!(timer.remaining_secs(), 27);
    }

    #[test]
    fn test_clamps_at_zero() {
        let mut timer = Countdown::new(3);
        assert!(timer.advance(10.0));
        assert_eq!(timer.remaining_secs(), 0);
        assert!(timer.advance(5.0));
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.elapsed_secs(), 3);
    }

    #[test]
    fn test_ignores_bad_dt() {
        let mut timer = Countdown::new(5);
        timer.advance(f32::NAN);
        timer.advance(-3.0);
        timer.advance(f32::INFINITY);
        assert_eq!(timer.remaining_secs(), 5);
    }
}

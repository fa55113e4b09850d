//! Scaled simulation time: the sole source of "now" for the engine.
//!
//! `VirtualClock` advances independently of wall-clock speed via `scale`,
//! can be paused, and exposes the calendar decomposition the (out-of-scope)
//! UI would display.

use std::time::Instant;

use serde::{Deserialize, Serialize};

pub const MS_PER_MIN: u64 = 1000;
pub const MIN_PER_HR: u64 = 60;
pub const HR_PER_DAY: u64 = 24;
pub const DAY_PER_MONTH: u64 = 30;
pub const MONTH_PER_YEAR: u64 = 12;
pub const MS_PER_HR: u64 = MS_PER_MIN * MIN_PER_HR;
pub const MS_PER_DAY: u64 = MS_PER_HR * HR_PER_DAY;

/// Minimal persisted-state shape, reserved but not wired to any file I/O.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub now_ms: u64,
    pub scale: f32,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub struct VirtualClock {
    now_ms: u64,
    scale: f32,
    paused: bool,
    last_tick: Instant,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            scale: 1.0,
            paused: false,
            last_tick: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.last_tick = Instant::now();
    }

    /// Advances `now_ms` by `real_elapsed * scale` since the last call, or
    /// since construction. A no-op while paused (besides not moving time).
    pub fn update(&mut self) {
        let now = Instant::now();
        if self.paused {
            self.last_tick = now;
            return;
        }
        let elapsed_ms = now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.now_ms += (elapsed_ms * self.scale as f64) as u64;
        self.last_tick = now;
    }

    /// For tests and headless drivers that inject virtual time directly
    /// instead of sourcing it from wall-clock elapsed time.
    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms += delta_ms;
    }

    /// True iff `now_ms - *last >= interval`; on true, `*last` is reset to
    /// `now_ms`.
    pub fn check_interval(&self, interval: u64, last: &mut u64) -> bool {
        if self.now_ms.saturating_sub(*last) >= interval {
            *last = self.now_ms;
            true
        } else {
            false
        }
    }

    /// Real-wall-clock variant, ignoring `scale`; intended for UI
    /// throttling rather than simulation logic.
    pub fn check_interval_realtime(&self, interval_ms: u64, last: &mut Instant) -> bool {
        let now = Instant::now();
        if now.duration_since(*last).as_millis() as u64 >= interval_ms {
            *last = now;
            true
        } else {
            false
        }
    }

    pub fn day_progress_ms(&self) -> u64 {
        self.now_ms % MS_PER_DAY
    }

    pub fn day_progress(&self) -> f64 {
        self.day_progress_ms() as f64 / MS_PER_DAY as f64
    }

    pub fn year(&self) -> u64 {
        self.now_ms / (MS_PER_DAY * DAY_PER_MONTH * MONTH_PER_YEAR)
    }

    pub fn month(&self) -> u64 {
        (self.now_ms / (MS_PER_DAY * DAY_PER_MONTH)) % MONTH_PER_YEAR
    }

    pub fn day(&self) -> u64 {
        (self.now_ms / MS_PER_DAY) % DAY_PER_MONTH
    }

    pub fn hour(&self) -> u64 {
        (self.now_ms / MS_PER_HR) % HR_PER_DAY
    }

    pub fn minute(&self) -> u64 {
        (self.now_ms / MS_PER_MIN) % MIN_PER_HR
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            now_ms: self.now_ms,
            scale: self.scale,
            paused: self.paused,
        }
    }

    /// Reserved, unimplemented: the save/load contract is a no-op, matching
    /// the original's own empty `SaveToFile`/`LoadFromFile` bodies.
    pub fn save_to_file(&self, _path: &str) {}

    /// Reserved, unimplemented: see `save_to_file`.
    pub fn load_from_file(&mut self, _path: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_now_ms() {
        let mut clock = VirtualClock::new();
        clock.advance(500);
        assert_eq!(clock.now_ms(), 500);
    }

    #[test]
    fn check_interval_fires_once_then_resets() {
        let mut clock = VirtualClock::new();
        let mut last = 0u64;
        clock.advance(100);
        assert!(!clock.check_interval(200, &mut last));
        clock.advance(150);
        assert!(clock.check_interval(200, &mut last));
        assert_eq!(last, clock.now_ms());
        assert!(!clock.check_interval(200, &mut last));
    }

    #[test]
    fn day_progress_wraps() {
        let mut clock = VirtualClock::new();
        clock.advance(MS_PER_DAY + 1234);
        assert_eq!(clock.day_progress_ms(), 1234);
    }

    #[test]
    fn calendar_decomposition() {
        let mut clock = VirtualClock::new();
        // 1 day, 2 hours, 3 minutes in.
        clock.advance(MS_PER_DAY + 2 * MS_PER_HR + 3 * MS_PER_MIN);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.hour(), 2);
        assert_eq!(clock.minute(), 3);
    }

    #[test]
    fn pause_stops_update_from_accumulating() {
        let mut clock = VirtualClock::new();
        clock.pause();
        clock.update();
        assert_eq!(clock.now_ms(), 0);
    }
}

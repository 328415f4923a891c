//! Single-alarm repeating countdown keyed off clock ticks.

use crate::time::Tick;

/// A repeating alarm measured in ticks.
///
/// The alarm fires on the tick it was armed and then every `period` ticks,
/// counted from the most recent firing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    period: u32,
    start: Tick,
}

impl Timer {
    /// Creates a disarmed timer.
    pub const fn new() -> Self {
        Self { period: 0, start: 0 }
    }

    /// Cancels any pending alarm, sets a new period and rebases to `now`.
    pub fn init(&mut self, period: u8, now: Tick) {
        self.reset();
        self.period = period as u32;
        self.start(0, now);
    }

    /// Rebases the start to `now + offset` without touching the period.
    pub fn start(&mut self, offset: u32, now: Tick) {
        self.start = now.wrapping_add(offset);
    }

    /// Disarms the timer.
    pub fn reset(&mut self) {
        self.period = 0;
        self.start = 0;
    }

    /// Returns the configured period, zero when disarmed.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Returns true if the alarm is due at `now`.
    ///
    /// A start in the logical future (after an offset `start`) is never due.
    pub fn alarm(&mut self, now: Tick) -> bool {
        if self.period == 0 {
            return false;
        }
        let elapsed = now.wrapping_sub(self.start) as i32;
        if elapsed < 0 {
            return false;
        }
        if elapsed == 0 {
            return true;
        }
        if (elapsed as u32) % self.period != 0 {
            return false;
        }
        self.start = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = Timer::new();
        for now in 0..100 {
            assert!(!timer.alarm(now));
        }
    }

    #[test]
    fn fires_on_arming_tick() {
        let mut timer = Timer::new();
        timer.init(5, 10);
        assert!(timer.alarm(10));
        assert!(!timer.alarm(11));
        assert!(timer.alarm(15));
    }

    #[test]
    fn offset_start_waits_until_due() {
        let mut timer = Timer::new();
        timer.init(3, 0);
        timer.start(10, 0);
        for now in 0..10 {
            assert!(!timer.alarm(now));
        }
        assert!(timer.alarm(10));
        assert!(timer.alarm(13));
    }

    #[test]
    fn alarm_survives_tick_wraparound() {
        let mut timer = Timer::new();
        timer.init(4, u32::MAX - 1);
        assert!(timer.alarm(u32::MAX - 1));
        assert!(!timer.alarm(u32::MAX));
        assert!(!timer.alarm(0));
        assert!(timer.alarm(2));
    }

    #[test]
    fn reset_disarms() {
        let mut timer = Timer::new();
        timer.init(1, 0);
        timer.reset();
        assert_eq!(timer.period(), 0);
        assert!(!timer.alarm(1));
    }
}

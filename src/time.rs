//! Logical tick time.
//!
//! The engine never looks at wall time. Everything is measured in ticks of a
//! [`Clock`] that advances exactly once per engine tick. Pacing the ticks to
//! [`TICKRATE`](crate::config::TICKRATE) is the job of whoever drives the
//! engine: a 1 kHz timer interrupt on hardware, or [`TickPacer`] on a host.

/// One unit of logical time. Wraps at `u32::MAX`.
pub type Tick = u32;

/// Trait for abstracting tick sources.
pub trait TimeSource {
    /// Returns the current tick.
    fn now(&self) -> Tick;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Tick {
        (**self).now()
    }
}

/// Monotonic wrapping tick counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    cur_tick: Tick,
}

impl Clock {
    /// Creates a clock at tick zero.
    pub const fn new() -> Self {
        Self { cur_tick: 0 }
    }

    /// Creates a clock starting at an arbitrary tick.
    pub const fn starting_at(tick: Tick) -> Self {
        Self { cur_tick: tick }
    }

    /// Advances the clock by one tick.
    ///
    /// Must be called only after every per-tick consumer has read [`now`](TimeSource::now).
    #[inline]
    pub fn tick(&mut self) {
        self.cur_tick = self.cur_tick.wrapping_add(1);
    }
}

impl TimeSource for Clock {
    #[inline]
    fn now(&self) -> Tick {
        self.cur_tick
    }
}

/// Converts milliseconds to ticks at the configured tickrate.
#[inline]
pub const fn ms_to_ticks(ms: u32) -> Tick {
    ((ms as u64 * crate::config::TICKRATE as u64) / 1000) as Tick
}

/// Busy-paces a hosted tick loop to [`TICKRATE`](crate::config::TICKRATE).
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct TickPacer {
    prev: std::time::Instant,
    period: std::time::Duration,
}

#[cfg(feature = "std")]
impl TickPacer {
    /// Creates a pacer whose first period starts now.
    pub fn new() -> Self {
        Self {
            prev: std::time::Instant::now(),
            period: std::time::Duration::from_micros(1_000_000 / crate::config::TICKRATE as u64),
        }
    }

    /// Blocks until one tick period has elapsed since the previous call.
    pub fn wait(&mut self) {
        while self.prev.elapsed() < self.period {
            core::hint::spin_loop();
        }
        self.prev = std::time::Instant::now();
    }
}

#[cfg(feature = "std")]
impl Default for TickPacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_wraps_at_max() {
        let mut clock = Clock::starting_at(u32::MAX);
        clock.tick();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn ms_to_ticks_is_identity_at_1khz() {
        assert_eq!(ms_to_ticks(400), 400);
    }
}

//! Shared test infrastructure for helios-core integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use helios_core::{ButtonInput, Pattern, RgbColor, RgbLed, Tick, TimeSource};

// ============================================================================
// Mock Time
// ============================================================================

/// Mock tick source that tests move by hand
#[derive(Debug, Default)]
pub struct MockClock {
    now: Tick,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: 0 }
    }

    pub fn starting_at(now: Tick) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ticks: u32) {
        self.now = self.now.wrapping_add(ticks);
    }

    pub fn set(&mut self, now: Tick) {
        self.now = now;
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> Tick {
        self.now
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color writes for testing
#[derive(Debug, Default)]
pub struct MockLed {
    current_color: RgbColor,
    color_history: Vec<RgbColor>,
}

impl MockLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_last_color(&self) -> RgbColor {
        self.current_color
    }

    pub fn color_history(&self) -> &[RgbColor] {
        &self.color_history
    }

    pub fn write_count(&self) -> usize {
        self.color_history.len()
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: RgbColor) {
        self.current_color = color;
        self.color_history.push(color);
    }
}

// ============================================================================
// Mock Button Signal
// ============================================================================

/// Raw button level set directly by the test
#[derive(Debug, Default)]
pub struct MockInput {
    pub pressed: bool,
}

impl MockInput {
    pub fn pressed() -> Self {
        Self { pressed: true }
    }

    pub fn released() -> Self {
        Self { pressed: false }
    }
}

impl ButtonInput for MockInput {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Plays `ticks` ticks starting at the clock's current tick.
///
/// Returns, per tick, the last color written during that tick (`None` when
/// the pattern left the LED alone).
pub fn play_ticks(
    pat: &mut Pattern,
    clock: &mut MockClock,
    led: &mut MockLed,
    ticks: u32,
) -> Vec<Option<RgbColor>> {
    let mut out = Vec::with_capacity(ticks as usize);
    for _ in 0..ticks {
        let before = led.write_count();
        pat.play(&*clock, led);
        out.push((led.write_count() > before).then(|| led.get_last_color()));
        clock.advance(1);
    }
    out
}

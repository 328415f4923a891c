//! Single-button gesture decoder.
//!
//! [`Button::update`] samples the raw level once per tick and derives edge
//! pulses (press, release), click classification at release (short or long,
//! split at [`SHORT_CLICK_THRESHOLD`]) and running hold/release durations.
//! Every pulse is valid only for the tick that produced it.

use crate::config::SHORT_CLICK_THRESHOLD;
use crate::time::{Tick, TimeSource};

/// Trait for abstracting the raw button signal.
pub trait ButtonInput {
    /// Returns true while the button is held down.
    fn is_pressed(&mut self) -> bool;
}

impl<I: ButtonInput + ?Sized> ButtonInput for &mut I {
    fn is_pressed(&mut self) -> bool {
        (**self).is_pressed()
    }
}

/// Reads a button wired to an `embedded-hal` input pin.
#[derive(Debug)]
pub struct PinButton<P> {
    pin: P,
    active_low: bool,
}

impl<P: embedded_hal::digital::InputPin> PinButton<P> {
    /// A button that reads high while pressed.
    pub fn active_high(pin: P) -> Self {
        Self { pin, active_low: false }
    }

    /// A button with a pull-up that reads low while pressed.
    pub fn active_low(pin: P) -> Self {
        Self { pin, active_low: true }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::InputPin> ButtonInput for PinButton<P> {
    fn is_pressed(&mut self) -> bool {
        // a failed read counts as released
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        level.unwrap_or(false)
    }
}

/// Button state derived from the raw signal.
#[derive(Debug)]
pub struct Button<I: ButtonInput> {
    input: I,
    press_time: Tick,
    release_time: Tick,
    hold_duration: u32,
    release_duration: u32,
    release_count: u8,
    button_state: bool,
    new_press: bool,
    new_release: bool,
    is_pressed: bool,
    short_click: bool,
    long_click: bool,
}

impl<I: ButtonInput> Button<I> {
    /// Creates a decoder from the current level of `input`.
    ///
    /// When the button is already down at creation (it woke the device), the
    /// first release is swallowed so it does not register as a click.
    pub fn new(mut input: I) -> Self {
        let button_state = input.is_pressed();
        Self {
            input,
            press_time: 0,
            release_time: 0,
            hold_duration: 0,
            release_duration: 0,
            release_count: (!button_state) as u8,
            button_state,
            new_press: false,
            new_release: false,
            is_pressed: button_state,
            short_click: false,
            long_click: false,
        }
    }

    /// Samples the input and recomputes every flag for the tick at `clock.now()`.
    pub fn update<T: TimeSource>(&mut self, clock: &T) {
        let now = clock.now();
        self.new_press = false;
        self.new_release = false;

        let new_state = self.input.is_pressed();
        if new_state != self.button_state {
            self.button_state = new_state;
            self.is_pressed = new_state;
            if self.is_pressed {
                self.press_time = now;
                self.new_press = true;
            } else {
                if self.release_count > 0 {
                    self.release_time = now;
                    self.new_release = true;
                }
                self.release_count = self.release_count.wrapping_add(1);
            }
        }

        if self.is_pressed {
            self.hold_duration = elapsed_since(now, self.press_time);
        } else {
            self.release_duration = elapsed_since(now, self.release_time);
        }

        self.short_click = self.new_release && self.hold_duration <= SHORT_CLICK_THRESHOLD;
        self.long_click = self.new_release && self.hold_duration > SHORT_CLICK_THRESHOLD;
    }

    /// Pressed this tick.
    pub fn on_press(&self) -> bool {
        self.new_press
    }

    /// Released this tick.
    pub fn on_release(&self) -> bool {
        self.new_release
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Released this tick after a hold of at most the threshold.
    pub fn on_short_click(&self) -> bool {
        self.short_click
    }

    /// Released this tick after a hold longer than the threshold.
    pub fn on_long_click(&self) -> bool {
        self.long_click
    }

    pub fn press_time(&self) -> Tick {
        self.press_time
    }

    pub fn release_time(&self) -> Tick {
        self.release_time
    }

    /// Ticks the button is, or was last, held down.
    pub fn hold_duration(&self) -> u32 {
        self.hold_duration
    }

    /// Ticks the button is, or was last, released.
    pub fn release_duration(&self) -> u32 {
        self.release_duration
    }

    /// Releases seen so far. Wraps at 255.
    pub fn release_count(&self) -> u8 {
        self.release_count
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Access to the raw input, for simulated signals.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

/// `now - then`, or zero when `then` looks like it is in the future.
fn elapsed_since(now: Tick, then: Tick) -> u32 {
    let diff = now.wrapping_sub(then) as i32;
    if diff < 0 { 0 } else { diff as u32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

    struct Level {
        high: bool,
        broken: bool,
    }

    impl ErrorType for Level {
        type Error = ErrorKind;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            if self.broken { Err(ErrorKind::Other) } else { Ok(self.high) }
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn active_high_pin_pressed_when_high() {
        let mut btn = PinButton::active_high(Level { high: true, broken: false });
        assert!(btn.is_pressed());
        let mut btn = PinButton::active_high(Level { high: false, broken: false });
        assert!(!btn.is_pressed());
    }

    #[test]
    fn active_low_pin_pressed_when_low() {
        let mut btn = PinButton::active_low(Level { high: false, broken: false });
        assert!(btn.is_pressed());
        let mut btn = PinButton::active_low(Level { high: true, broken: false });
        assert!(!btn.is_pressed());
    }

    #[test]
    fn failed_pin_read_counts_as_released() {
        let mut btn = PinButton::active_high(Level { high: true, broken: true });
        assert!(!btn.is_pressed());
        let mut btn = PinButton::active_low(Level { high: false, broken: true });
        assert!(!btn.is_pressed());
        assert!(btn.release().broken);
    }

    #[test]
    fn elapsed_clamps_future_to_zero() {
        assert_eq!(elapsed_since(5, 10), 0);
        assert_eq!(elapsed_since(10, 5), 5);
        assert_eq!(elapsed_since(2, u32::MAX), 3);
    }
}

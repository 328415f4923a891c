//! LED output.
//!
//! [`RgbLed`] is the seam to the hardware (PWM pins, a terminal, a test
//! recorder). [`Led`] sits in front of it as a one-pixel frame buffer: the
//! pattern writes into it during the tick and [`Led::update`] pushes the
//! brightness-scaled color out once at the end of the tick.

use crate::color::{HsvColor, RgbColor};
use crate::colors::RGB_OFF;
use crate::config::DEFAULT_BRIGHTNESS;
use crate::time::Tick;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.). Handle any
/// hardware errors internally; this method cannot fail.
pub trait RgbLed {
    /// Sets the LED to the specified color.
    fn set_color(&mut self, color: RgbColor);

    /// Turns the LED off.
    fn clear(&mut self) {
        self.set_color(RGB_OFF);
    }
}

impl<L: RgbLed + ?Sized> RgbLed for &mut L {
    fn set_color(&mut self, color: RgbColor) {
        (**self).set_color(color)
    }
}

/// Buffered LED with a global brightness.
#[derive(Debug)]
pub struct Led<O: RgbLed> {
    output: O,
    led_color: RgbColor,
    real_color: RgbColor,
    brightness: u8,
}

impl<O: RgbLed> Led<O> {
    /// Creates a cleared LED at the default brightness.
    pub fn new(output: O) -> Self {
        Self {
            output,
            led_color: RGB_OFF,
            real_color: RGB_OFF,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// The color last set, before brightness scaling.
    pub fn get(&self) -> RgbColor {
        self.led_color
    }

    /// The color [`update`](Self::update) will output.
    pub fn real_color(&self) -> RgbColor {
        self.real_color
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Changes the global brightness. Takes effect on the next `set`.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Dims the buffered color by `fade_by / 256`.
    pub fn adjust_brightness(&mut self, fade_by: u8) {
        let faded = self.led_color.adjust_brightness(fade_by);
        self.set_color(faded);
    }

    /// Shows `on_col` for `on_time` ticks then `off_col` for `off_time` ticks.
    pub fn strobe(&mut self, now: Tick, on_time: u16, off_time: u16, off_col: RgbColor, on_col: RgbColor) {
        let period = on_time as u32 + off_time as u32;
        if period == 0 {
            return;
        }
        let col = if now % period > on_time as u32 { off_col } else { on_col };
        self.set_color(col);
    }

    /// Strobes a hue that swings up to `magnitude` units and back over `2 * duration` ticks.
    pub fn breath(&mut self, now: Tick, hue: u8, duration: u32, magnitude: u8, sat: u8, val: u8) {
        if duration == 0 {
            return;
        }
        let duration = duration as u64;
        let span = 2 * duration;
        let phase = now as u64 % span;
        let shift = if phase < duration {
            (phase * magnitude as u64) / duration
        } else {
            ((span - phase) * magnitude as u64) / duration
        };
        let col = HsvColor::new(hue.wrapping_add(shift as u8), sat, val).into();
        self.strobe(now, 2, 13, RGB_OFF, col);
    }

    /// Writes the scaled color to the hardware.
    pub fn update(&mut self) {
        self.output.set_color(self.real_color);
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: RgbLed> RgbLed for Led<O> {
    fn set_color(&mut self, color: RgbColor) {
        self.led_color = color;
        self.real_color = color.scale_brightness(self.brightness);
    }
}

//! The per-tick device context.
//!
//! [`Engine`] owns every component of one device and runs them in the fixed
//! tick order: sample the button, react to clicks, play the pattern, flush
//! the LED, then advance the clock. Several engines can live side by side,
//! for example to simulate two devices in one test.

use crate::button::{Button, ButtonInput};
use crate::command::EngineAction;
use crate::config::{BRIGHTNESS_STEP, DEFAULT_BRIGHTNESS, NUM_MODE_SLOTS};
use crate::led::{Led, RgbLed};
use crate::pattern::Pattern;
use crate::patterns;
use crate::storage::{Eeprom, Storage, StorageError};
use crate::time::{Clock, Tick, TimeSource};

/// One device: clock, button, LED, storage and the live pattern.
#[derive(Debug)]
pub struct Engine<I: ButtonInput, O: RgbLed, E: Eeprom> {
    clock: Clock,
    button: Button<I>,
    led: Led<O>,
    storage: Storage<E>,
    pattern: Pattern,
    cur_mode: u8,
}

impl<I: ButtonInput, O: RgbLed, E: Eeprom> Engine<I, O, E> {
    /// Boots a device, restoring brightness and the last mode from `eeprom`.
    ///
    /// A zero brightness byte means the store was never written and falls
    /// back to [`DEFAULT_BRIGHTNESS`]. A corrupt mode slot falls back to the
    /// factory pattern for that slot.
    pub fn new(input: I, output: O, eeprom: E) -> Self {
        let mut storage = Storage::new(eeprom);
        let brightness = match storage.read_brightness() {
            0 => DEFAULT_BRIGHTNESS,
            b => b,
        };
        let mode = storage.read_current_mode() % NUM_MODE_SLOTS;

        let mut led = Led::new(output);
        led.set_brightness(brightness);

        let mut engine = Self {
            clock: Clock::new(),
            button: Button::new(input),
            led,
            storage,
            pattern: Pattern::default(),
            cur_mode: mode,
        };
        engine.load_mode(mode);
        engine
    }

    /// Runs one tick of the pipeline.
    pub fn tick(&mut self) {
        self.button.update(&self.clock);

        if self.button.on_short_click() {
            self.next_mode();
        } else if self.button.on_long_click() {
            self.randomize_mode();
        }

        self.pattern.play(&self.clock, &mut self.led);
        self.led.update();
        self.clock.tick();
    }

    /// Runs `count` ticks.
    pub fn run(&mut self, count: u32) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Applies an action between ticks.
    pub fn handle_action(&mut self, action: EngineAction) -> Result<(), StorageError> {
        match action {
            EngineAction::NextMode => self.next_mode(),
            EngineAction::LoadMode(mode) => self.load_mode(mode),
            EngineAction::Randomize => {
                patterns::randomize(&mut self.pattern);
                return self.save_mode();
            }
            EngineAction::SaveMode => return self.save_mode(),
            EngineAction::SetBrightness(brightness) => self.set_brightness(brightness),
            EngineAction::CycleBrightness => self.cycle_brightness(),
        }
        Ok(())
    }

    /// Loads mode `mode` (wrapped into range) and makes it current.
    pub fn load_mode(&mut self, mode: u8) {
        let mode = mode % NUM_MODE_SLOTS;
        self.pattern = match self.storage.read_pattern(mode) {
            Ok(pat) => pat,
            Err(_) => patterns::make_default(mode),
        };
        self.pattern.init();
        self.cur_mode = mode;
        self.storage.write_current_mode(mode);
        #[cfg(feature = "defmt")]
        defmt::debug!("mode {=u8} loaded", mode);
    }

    pub fn next_mode(&mut self) {
        self.load_mode((self.cur_mode + 1) % NUM_MODE_SLOTS);
    }

    /// Writes the live pattern into the current mode slot.
    pub fn save_mode(&mut self) -> Result<(), StorageError> {
        self.storage.write_pattern(self.cur_mode, &self.pattern)
    }

    fn randomize_mode(&mut self) {
        patterns::randomize(&mut self.pattern);
        #[cfg(feature = "defmt")]
        defmt::debug!("mode {=u8} randomized", self.cur_mode);
        if let Err(_e) = self.save_mode() {
            #[cfg(feature = "defmt")]
            defmt::warn!("failed to save mode: {}", _e);
        }
    }

    /// Sets the LED brightness and persists it.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.led.set_brightness(brightness);
        self.storage.write_brightness(brightness);
    }

    /// Steps through the three brightness levels, low to high, then wraps.
    pub fn cycle_brightness(&mut self) {
        let level = self.led.brightness() / BRIGHTNESS_STEP;
        let next = if level >= 3 { 1 } else { level + 1 };
        self.set_brightness(next * BRIGHTNESS_STEP);
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn cur_mode(&self) -> u8 {
        self.cur_mode
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The live pattern. Call [`Pattern::init`] after changing it.
    pub fn pattern_mut(&mut self) -> &mut Pattern {
        &mut self.pattern
    }

    pub fn button(&self) -> &Button<I> {
        &self.button
    }

    /// The raw button signal, for injecting simulated input.
    pub fn input_mut(&mut self) -> &mut I {
        self.button.input_mut()
    }

    pub fn led(&self) -> &Led<O> {
        &self.led
    }

    pub fn storage(&self) -> &Storage<E> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage<E> {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbColor;
    use crate::storage::MemoryEeprom;

    struct Released;

    impl ButtonInput for Released {
        fn is_pressed(&mut self) -> bool {
            false
        }
    }

    struct Sink;

    impl RgbLed for Sink {
        fn set_color(&mut self, _color: RgbColor) {}
    }

    #[test]
    fn blank_store_boots_factory_mode_zero() {
        let engine = Engine::new(Released, Sink, MemoryEeprom::<256>::new());
        assert_eq!(engine.cur_mode(), 0);
        assert_eq!(engine.led().brightness(), DEFAULT_BRIGHTNESS);
        assert_eq!(*engine.pattern(), patterns::make_default(0));
    }

    #[test]
    fn brightness_cycles_through_three_levels() {
        let mut engine = Engine::new(Released, Sink, MemoryEeprom::<256>::new());
        let mut seen = [0u8; 4];
        for level in seen.iter_mut() {
            engine.cycle_brightness();
            *level = engine.led().brightness();
        }
        assert_eq!(seen, [85, 170, 255, 85]);
    }

    #[test]
    fn clock_advances_once_per_tick() {
        let mut engine = Engine::new(Released, Sink, MemoryEeprom::<256>::new());
        engine.run(25);
        assert_eq!(engine.now(), 25);
    }
}

//! Simulated button signal for hosted builds and tests.
//!
//! Input is injected at the signal level: queued events change the virtual pin
//! that [`Button::update`](crate::button::Button::update) samples, so hold
//! durations and click classification stay consistent with real presses.

use crate::button::ButtonInput;
use crate::config::SHORT_CLICK_THRESHOLD;
use heapless::Deque;

/// Ticks a scripted long click keeps the pin down.
///
/// The hold duration seen at release is one less than this.
pub const LONG_CLICK_HOLD_TICKS: u32 = SHORT_CLICK_THRESHOLD + 2;

/// One queued input event. One event is consumed per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Pin down.
    Press,
    /// Pin up.
    Release,
    /// Flip the pin.
    Toggle,
    /// Leave the pin alone for one tick.
    Wait,
    /// Press for one tick, then release.
    ShortClick,
    /// Press for [`LONG_CLICK_HOLD_TICKS`], then release.
    LongClick,
}

impl InputEvent {
    /// Parses the single-character script form: `p r t w c l`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(InputEvent::Press),
            'r' => Some(InputEvent::Release),
            't' => Some(InputEvent::Toggle),
            'w' => Some(InputEvent::Wait),
            'c' => Some(InputEvent::ShortClick),
            'l' => Some(InputEvent::LongClick),
            _ => None,
        }
    }
}

/// A virtual pin driven by a queue of [`InputEvent`]s.
#[derive(Debug)]
pub struct VirtualButton<const N: usize = 64> {
    pin_state: bool,
    queue: Deque<InputEvent, N>,
    release_in: u32,
}

impl<const N: usize> VirtualButton<N> {
    /// Creates a released button with an empty queue.
    pub const fn new() -> Self {
        Self {
            pin_state: false,
            queue: Deque::new(),
            release_in: 0,
        }
    }

    /// Presses the pin immediately.
    pub fn press(&mut self) {
        self.pin_state = true;
    }

    /// Releases the pin immediately.
    pub fn release(&mut self) {
        self.pin_state = false;
    }

    pub fn toggle(&mut self) {
        self.pin_state = !self.pin_state;
    }

    /// Queues an event. Returns it back if the queue is full.
    pub fn queue_input(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.queue.push_back(event)
    }

    /// Queues every recognized character of `script`, ignoring the rest.
    ///
    /// Returns how many events were queued before the queue filled up.
    pub fn queue_script(&mut self, script: &str) -> usize {
        let mut queued = 0;
        for event in script.chars().filter_map(InputEvent::from_char) {
            if self.queue.push_back(event).is_err() {
                break;
            }
            queued += 1;
        }
        queued
    }

    /// Events still waiting, not counting a click already in progress.
    pub fn input_queue_size(&self) -> usize {
        self.queue.len()
    }

    /// True while events are queued or a scripted click is still held.
    pub fn is_busy(&self) -> bool {
        !self.queue.is_empty() || self.release_in > 0
    }

    fn process_next(&mut self) {
        if self.release_in > 0 {
            self.release_in -= 1;
            if self.release_in == 0 {
                self.pin_state = false;
            }
            return;
        }
        let Some(event) = self.queue.pop_front() else {
            return;
        };
        match event {
            InputEvent::Press => self.press(),
            InputEvent::Release => self.release(),
            InputEvent::Toggle => self.toggle(),
            InputEvent::Wait => {}
            InputEvent::ShortClick => {
                self.pin_state = true;
                self.release_in = 1;
            }
            InputEvent::LongClick => {
                self.pin_state = true;
                self.release_in = LONG_CLICK_HOLD_TICKS;
            }
        }
    }
}

impl<const N: usize> Default for VirtualButton<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ButtonInput for VirtualButton<N> {
    fn is_pressed(&mut self) -> bool {
        self.process_next();
        self.pin_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_ignores_unknown_characters() {
        let mut btn = VirtualButton::<8>::new();
        assert_eq!(btn.queue_script("p x w\nr"), 3);
        assert_eq!(btn.input_queue_size(), 3);
    }

    #[test]
    fn short_click_holds_for_one_sample() {
        let mut btn = VirtualButton::<8>::new();
        btn.queue_input(InputEvent::ShortClick).unwrap();
        assert!(btn.is_pressed());
        assert!(!btn.is_pressed());
        assert!(!btn.is_busy());
    }

    #[test]
    fn full_queue_rejects() {
        let mut btn = VirtualButton::<2>::new();
        assert_eq!(btn.queue_script("www"), 2);
        assert_eq!(btn.queue_input(InputEvent::Press), Err(InputEvent::Press));
    }
}

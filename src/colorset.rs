//! Fixed-capacity ordered color collection with a draw cursor.

use crate::color::{HsvColor, RgbColor};
use crate::config::{COLORSET_SIZE, NUM_COLOR_SLOTS};
use crate::random::Random;
use heapless::Vec;

/// An ordered set of up to [`NUM_COLOR_SLOTS`] colors.
///
/// The cursor hands colors out one at a time through [`get_next`](Self::get_next),
/// wrapping back to the first color after the last. Out-of-range reads return
/// an empty color and out-of-range writes are ignored.
#[derive(Debug, Clone, Default)]
pub struct Colorset {
    palette: Vec<RgbColor, NUM_COLOR_SLOTS>,
    cur_index: u8,
}

impl Colorset {
    /// Creates an empty colorset.
    pub const fn new() -> Self {
        Self {
            palette: Vec::new(),
            cur_index: 0,
        }
    }

    /// Creates a colorset from a slice, keeping at most [`NUM_COLOR_SLOTS`] colors.
    pub fn from_colors(colors: &[RgbColor]) -> Self {
        let mut set = Self::new();
        for &col in colors.iter().take(NUM_COLOR_SLOTS) {
            set.add_color(col);
        }
        set
    }

    /// Creates a colorset from packed `0xRRGGBB` values.
    pub fn from_raw(colors: &[u32]) -> Self {
        let mut set = Self::new();
        for &raw in colors.iter().take(NUM_COLOR_SLOTS) {
            set.add_color(RgbColor::from_raw(raw));
        }
        set
    }

    /// Number of active colors.
    #[inline]
    pub fn num_colors(&self) -> u8 {
        self.palette.len() as u8
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Current cursor position.
    #[inline]
    pub fn cur_index(&self) -> u8 {
        self.cur_index
    }

    /// The active colors in order.
    pub fn colors(&self) -> &[RgbColor] {
        &self.palette
    }

    /// Appends a color. Returns false when the set is full.
    pub fn add_color(&mut self, col: RgbColor) -> bool {
        self.palette.push(col).is_ok()
    }

    /// Returns the color at `index`, or an empty color if out of range.
    pub fn get(&self, index: u8) -> RgbColor {
        self.palette.get(index as usize).copied().unwrap_or_default()
    }

    /// Overwrites the color at `index`, or appends when `index` equals the count.
    ///
    /// Any other index is ignored.
    pub fn set(&mut self, index: u8, col: RgbColor) {
        let index = index as usize;
        if let Some(slot) = self.palette.get_mut(index) {
            *slot = col;
        } else if index == self.palette.len() {
            // fails silently when already at capacity
            let _ = self.palette.push(col);
        }
    }

    /// Removes the color at `index`, shifting later colors down.
    pub fn remove_color(&mut self, index: u8) {
        if (index as usize) >= self.palette.len() {
            return;
        }
        self.palette.remove(index as usize);
        if self.cur_index >= self.num_colors() {
            self.cur_index = 0;
        }
    }

    /// Returns the color under the cursor and advances the cursor cyclically.
    ///
    /// An empty set returns an empty color and leaves the cursor alone.
    pub fn get_next(&mut self) -> RgbColor {
        let count = self.num_colors();
        if count == 0 {
            return RgbColor::default();
        }
        if self.cur_index >= count {
            self.cur_index = 0;
        }
        let col = self.palette[self.cur_index as usize];
        self.cur_index = (self.cur_index + 1) % count;
        col
    }

    /// Moves the cursor back one color and returns the color there.
    pub fn get_prev(&mut self) -> RgbColor {
        let count = self.num_colors();
        if count == 0 {
            return RgbColor::default();
        }
        self.cur_index = if self.cur_index == 0 || self.cur_index >= count {
            count - 1
        } else {
            self.cur_index - 1
        };
        self.palette[self.cur_index as usize]
    }

    /// Moves the cursor back to the first color.
    pub fn reset_index(&mut self) {
        self.cur_index = 0;
    }

    /// Removes every color.
    pub fn clear(&mut self) {
        self.palette.clear();
        self.cur_index = 0;
    }

    /// Replaces the set with `num_colors` random fully saturated hues.
    ///
    /// A count of zero picks a random count between one and the capacity.
    pub fn randomize_colors(&mut self, rng: &mut Random, num_colors: u8) {
        self.clear();
        let num_colors = if num_colors == 0 {
            rng.next8(1, NUM_COLOR_SLOTS as u8)
        } else {
            num_colors.min(NUM_COLOR_SLOTS as u8)
        };
        for _ in 0..num_colors {
            let hue = rng.next_u8();
            self.add_color(HsvColor::new(hue, 255, 255).into());
        }
    }

    /// Serializes as a count byte followed by every slot, unused slots zeroed.
    pub fn to_bytes(&self) -> [u8; COLORSET_SIZE] {
        let mut out = [0u8; COLORSET_SIZE];
        out[0] = self.num_colors();
        for (i, col) in self.palette.iter().enumerate() {
            let at = 1 + i * 3;
            out[at] = col.red;
            out[at + 1] = col.green;
            out[at + 2] = col.blue;
        }
        out
    }

    /// Deserializes a colorset. Counts above capacity are clamped.
    pub fn from_bytes(bytes: &[u8; COLORSET_SIZE]) -> Self {
        let count = (bytes[0] as usize).min(NUM_COLOR_SLOTS);
        let mut set = Self::new();
        for i in 0..count {
            let at = 1 + i * 3;
            set.add_color(RgbColor::new(bytes[at], bytes[at + 1], bytes[at + 2]));
        }
        set
    }
}

/// Two colorsets are equal when they hold the same colors in the same order.
impl PartialEq for Colorset {
    fn eq(&self, other: &Self) -> bool {
        self.palette == other.palette
    }
}

impl Eq for Colorset {}

#[cfg(feature = "defmt")]
impl defmt::Format for Colorset {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Colorset({=[?]}, cur={=u8})", self.colors(), self.cur_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{RGB_BLUE, RGB_GREEN, RGB_RED};

    #[test]
    fn get_next_on_empty_set_returns_empty() {
        let mut set = Colorset::new();
        assert!(set.get_next().is_empty());
        assert_eq!(set.cur_index(), 0);
    }

    #[test]
    fn set_appends_only_at_count() {
        let mut set = Colorset::from_colors(&[RGB_RED]);
        set.set(3, RGB_BLUE);
        assert_eq!(set.num_colors(), 1);
        set.set(1, RGB_GREEN);
        assert_eq!(set.num_colors(), 2);
        set.set(0, RGB_BLUE);
        assert_eq!(set.get(0), RGB_BLUE);
    }

    #[test]
    fn set_never_exceeds_capacity() {
        let mut set = Colorset::new();
        for i in 0..10 {
            set.set(i, RGB_RED);
        }
        assert_eq!(set.num_colors() as usize, NUM_COLOR_SLOTS);
    }

    #[test]
    fn remove_shifts_and_clamps_cursor() {
        let mut set = Colorset::from_colors(&[RGB_RED, RGB_GREEN, RGB_BLUE]);
        set.get_next();
        set.get_next();
        assert_eq!(set.cur_index(), 2);
        set.remove_color(0);
        assert_eq!(set.colors(), &[RGB_GREEN, RGB_BLUE]);
        assert_eq!(set.cur_index(), 0);
        set.remove_color(9);
        assert_eq!(set.num_colors(), 2);
    }

    #[test]
    fn get_prev_walks_backwards() {
        let mut set = Colorset::from_colors(&[RGB_RED, RGB_GREEN, RGB_BLUE]);
        assert_eq!(set.get_prev(), RGB_BLUE);
        assert_eq!(set.get_prev(), RGB_GREEN);
    }

    #[test]
    fn equality_ignores_cursor() {
        let mut a = Colorset::from_colors(&[RGB_RED, RGB_GREEN]);
        let b = Colorset::from_colors(&[RGB_RED, RGB_GREEN]);
        a.get_next();
        assert_eq!(a, b);
    }
}

//! Seedable pseudo-random generator.
//!
//! A 31-bit linear congruential generator. It only has to be cheap and
//! reproducible: the same seed always yields the same stream, which is what
//! makes randomizing a pattern deterministic for a given pattern image.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Random {
    seed: u32,
}

impl Random {
    /// Creates a generator. A zero seed is replaced so the stream never sticks.
    pub const fn new(seed: u32) -> Self {
        Self {
            seed: if seed == 0 { 42 } else { seed },
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn step(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(1_103_515_245)
            .wrapping_add(12_345)
            & 0x7FFF_FFFF;
        self.seed
    }

    /// Returns a value in `min..=max`.
    pub fn next16(&mut self, min: u16, max: u16) -> u16 {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let range = (max - min) as u32 + 1;
        (self.step() % range) as u16 + min
    }

    /// Returns a value in `min..=max`.
    pub fn next8(&mut self, min: u8, max: u8) -> u8 {
        self.next16(min as u16, max as u16) as u8
    }

    /// Returns any byte.
    pub fn next_u8(&mut self) -> u8 {
        self.next8(0, u8::MAX)
    }
}

//! Checksummed pattern slots and config bytes in a byte-addressable store.
//!
//! Pattern slots grow up from address zero, each holding a serialized
//! [`Pattern`] followed by one CRC byte. Config bytes grow down from
//! [`CONFIG_START_INDEX`].

use crate::config::{CONFIG_START_INDEX, EEPROM_SIZE, NUM_PATTERN_SLOTS, PATTERN_SIZE, SLOT_SIZE};
use crate::pattern::Pattern;

pub const STORAGE_GLOBAL_FLAG_INDEX: u8 = 0;
pub const STORAGE_CURRENT_MODE_INDEX: u8 = 1;
pub const STORAGE_BRIGHTNESS_INDEX: u8 = 2;

/// Trait for abstracting the persistent byte store.
pub trait Eeprom {
    fn read_byte(&mut self, address: usize) -> u8;
    fn write_byte(&mut self, address: usize, data: u8);
}

/// A RAM-backed store, for hosted builds and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEeprom<const N: usize = EEPROM_SIZE> {
    bytes: [u8; N],
    writes: usize,
}

impl<const N: usize> MemoryEeprom<N> {
    /// Creates a store with every byte zero.
    pub const fn new() -> Self {
        Self { bytes: [0; N], writes: 0 }
    }

    pub fn bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Direct mutable access, bypassing the write counter.
    pub fn bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }

    /// Number of byte writes performed so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<const N: usize> Default for MemoryEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Eeprom for MemoryEeprom<N> {
    fn read_byte(&mut self, address: usize) -> u8 {
        self.bytes.get(address).copied().unwrap_or(0)
    }

    fn write_byte(&mut self, address: usize, data: u8) {
        if let Some(byte) = self.bytes.get_mut(address) {
            *byte = data;
            self.writes += 1;
        }
    }
}

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The slot index is past the last pattern slot.
    SlotOutOfRange { slot: u8, slots: u8 },
    /// The stored CRC does not match the stored pattern bytes.
    CrcMismatch { slot: u8, stored: u8, computed: u8 },
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::SlotOutOfRange { slot, slots } => {
                write!(f, "slot {} out of range, device has {} slots", slot, slots)
            }
            StorageError::CrcMismatch { slot, stored, computed } => {
                write!(
                    f,
                    "slot {} is corrupt: stored crc {:#04x}, computed {:#04x}",
                    slot, stored, computed
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// 8-bit djb2-style hash with a seed of 33.
pub fn crc8(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(33u8, |hash, &b| (hash << 5).wrapping_add(hash).wrapping_add(b))
}

/// Pattern and config persistence on top of an [`Eeprom`].
#[derive(Debug)]
pub struct Storage<E: Eeprom> {
    eeprom: E,
}

impl<E: Eeprom> Storage<E> {
    pub fn new(eeprom: E) -> Self {
        Self { eeprom }
    }

    pub fn eeprom(&self) -> &E {
        &self.eeprom
    }

    pub fn eeprom_mut(&mut self) -> &mut E {
        &mut self.eeprom
    }

    pub fn into_inner(self) -> E {
        self.eeprom
    }

    fn slot_pos(slot: u8) -> Result<usize, StorageError> {
        if slot >= NUM_PATTERN_SLOTS {
            return Err(StorageError::SlotOutOfRange {
                slot,
                slots: NUM_PATTERN_SLOTS,
            });
        }
        Ok(slot as usize * SLOT_SIZE)
    }

    fn read_image(&mut self, pos: usize) -> [u8; PATTERN_SIZE] {
        let mut image = [0u8; PATTERN_SIZE];
        for (i, byte) in image.iter_mut().enumerate() {
            *byte = self.eeprom.read_byte(pos + i);
        }
        image
    }

    /// Loads the pattern in `slot`. The caller must `init` it before playing.
    pub fn read_pattern(&mut self, slot: u8) -> Result<Pattern, StorageError> {
        let pos = Self::slot_pos(slot)?;
        let image = self.read_image(pos);
        let stored = self.eeprom.read_byte(pos + PATTERN_SIZE);
        let computed = crc8(&image);
        if stored != computed {
            #[cfg(feature = "defmt")]
            defmt::warn!("storage slot {=u8} failed crc check", slot);
            return Err(StorageError::CrcMismatch { slot, stored, computed });
        }
        Ok(Pattern::from_bytes(&image))
    }

    /// Writes `pat` and its CRC into `slot`, skipping bytes that already match.
    pub fn write_pattern(&mut self, slot: u8, pat: &Pattern) -> Result<(), StorageError> {
        let pos = Self::slot_pos(slot)?;
        let image = pat.to_bytes();
        for (i, &val) in image.iter().enumerate() {
            self.write_if_changed(pos + i, val);
        }
        self.write_if_changed(pos + PATTERN_SIZE, crc8(&image));
        Ok(())
    }

    /// True if `slot` holds a pattern whose CRC matches.
    pub fn check_crc(&mut self, slot: u8) -> bool {
        let Ok(pos) = Self::slot_pos(slot) else {
            return false;
        };
        let image = self.read_image(pos);
        self.eeprom.read_byte(pos + PATTERN_SIZE) == crc8(&image)
    }

    /// Swaps two whole slots, CRC included.
    pub fn swap_pattern(&mut self, slot1: u8, slot2: u8) -> Result<(), StorageError> {
        let pos1 = Self::slot_pos(slot1)?;
        let pos2 = Self::slot_pos(slot2)?;
        for i in 0..SLOT_SIZE {
            let b1 = self.eeprom.read_byte(pos1 + i);
            let b2 = self.eeprom.read_byte(pos2 + i);
            self.eeprom.write_byte(pos1 + i, b2);
            self.eeprom.write_byte(pos2 + i, b1);
        }
        Ok(())
    }

    /// Copies a whole slot, CRC included, from `src` to `dst`.
    pub fn copy_slot(&mut self, src: u8, dst: u8) -> Result<(), StorageError> {
        let src_pos = Self::slot_pos(src)?;
        let dst_pos = Self::slot_pos(dst)?;
        for i in 0..SLOT_SIZE {
            let b = self.eeprom.read_byte(src_pos + i);
            self.write_if_changed(dst_pos + i, b);
        }
        Ok(())
    }

    pub fn read_config(&mut self, index: u8) -> u8 {
        self.eeprom.read_byte(CONFIG_START_INDEX - index as usize)
    }

    pub fn write_config(&mut self, index: u8, val: u8) {
        self.write_if_changed(CONFIG_START_INDEX - index as usize, val);
    }

    pub fn read_global_flags(&mut self) -> u8 {
        self.read_config(STORAGE_GLOBAL_FLAG_INDEX)
    }

    pub fn write_global_flags(&mut self, flags: u8) {
        self.write_config(STORAGE_GLOBAL_FLAG_INDEX, flags)
    }

    pub fn read_current_mode(&mut self) -> u8 {
        self.read_config(STORAGE_CURRENT_MODE_INDEX)
    }

    pub fn write_current_mode(&mut self, mode: u8) {
        self.write_config(STORAGE_CURRENT_MODE_INDEX, mode)
    }

    pub fn read_brightness(&mut self) -> u8 {
        self.read_config(STORAGE_BRIGHTNESS_INDEX)
    }

    pub fn write_brightness(&mut self, brightness: u8) {
        self.write_config(STORAGE_BRIGHTNESS_INDEX, brightness)
    }

    fn write_if_changed(&mut self, address: usize, val: u8) {
        if self.eeprom.read_byte(address) != val {
            self.eeprom.write_byte(address, val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc8_of_empty_is_seed() {
        assert_eq!(crc8(&[]), 33);
    }

    #[test]
    fn crc8_steps_like_djb2() {
        // 33 * 33 + 1 = 1090, truncated to 8 bits
        assert_eq!(crc8(&[1]), (1090u32 & 0xFF) as u8);
    }

    #[test]
    fn config_bytes_grow_down_from_the_end() {
        let mut storage = Storage::new(MemoryEeprom::<EEPROM_SIZE>::new());
        storage.write_brightness(170);
        assert_eq!(storage.eeprom().bytes()[CONFIG_START_INDEX - 2], 170);
        assert_eq!(storage.read_brightness(), 170);
    }

    #[test]
    fn slots_stay_clear_of_config() {
        assert!((NUM_PATTERN_SLOTS as usize) * SLOT_SIZE <= CONFIG_START_INDEX - 2);
    }

    #[test]
    fn unchanged_bytes_are_not_rewritten() {
        let mut storage = Storage::new(MemoryEeprom::<EEPROM_SIZE>::new());
        storage.write_current_mode(3);
        let writes = storage.eeprom().writes();
        storage.write_current_mode(3);
        assert_eq!(storage.eeprom().writes(), writes);
    }
}

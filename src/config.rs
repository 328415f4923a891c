//! Compile-time configuration.
//!
//! Durations are in ticks. At the default tickrate of 1000 a tick is one
//! millisecond, so the values read as milliseconds too.

/// Engine ticks per second.
pub const TICKRATE: u32 = 1000;

/// Longest hold, inclusive, still classified as a short click.
pub const SHORT_CLICK_THRESHOLD: u32 = 400;

/// Number of colors a colorset can hold.
pub const NUM_COLOR_SLOTS: usize = 6;

/// Number of mode slots on the device.
pub const NUM_MODE_SLOTS: u8 = 6;

/// Brightness the LED starts with when nothing is stored.
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Brightness step; the three levels are 1x, 2x and 3x this value.
pub const BRIGHTNESS_STEP: u8 = 85;

// ============================================================================
// Storage layout
// ============================================================================

/// Count byte plus three bytes per color slot.
pub const COLORSET_SIZE: usize = 1 + 3 * NUM_COLOR_SLOTS;

/// Serialized pattern arguments.
pub const PATTERN_ARGS_SIZE: usize = 7;

/// Args, one flags byte, then the colorset.
pub const PATTERN_SIZE: usize = PATTERN_ARGS_SIZE + 1 + COLORSET_SIZE;

/// A pattern followed by its CRC byte.
pub const SLOT_SIZE: usize = PATTERN_SIZE + 1;

/// Bytes of persistent storage on the device.
pub const EEPROM_SIZE: usize = 256;

/// Config bytes are addressed downwards from here.
pub const CONFIG_START_INDEX: usize = EEPROM_SIZE - 1;

/// Pattern slots that fit below the config bytes.
pub const NUM_PATTERN_SLOTS: u8 = 9;

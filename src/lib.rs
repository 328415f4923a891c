#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pattern`**: The blink state machine, driven by `PatternArgs` and a private `Colorset`
//! - **`PatternArgs`**: On, off, gap and dash durations, group size, blend speed and hue flips, all in ticks
//! - **`Colorset`**: Up to six colors with a cursor that hands them out cyclically
//! - **`Button`**: Samples a `ButtonInput` once per tick and classifies clicks
//! - **`Led`**: One-pixel frame buffer with global brightness in front of an `RgbLed`
//! - **`Storage`**: Checksummed pattern slots and config bytes on an `Eeprom`
//! - **`Engine`**: One device's clock, button, LED, storage and live pattern, run tick by tick
//! - **`TimeSource`**: Trait for anything that reports the current tick
//!
//! Colors are 8-bit `RgbColor` values throughout. Hues use a 256-step wheel.
//! `RgbColor` converts to and from `palette::Srgb` for drivers that want
//! normalized floats.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod button;
pub mod color;
pub mod colors;
pub mod colorset;
pub mod command;
pub mod config;
pub mod engine;
pub mod led;
pub mod pattern;
pub mod patterns;
pub mod random;
pub mod sim;
pub mod storage;
pub mod time;
pub mod timer;

pub use button::{Button, ButtonInput, PinButton};
pub use color::{HsvAlgorithm, HsvColor, RgbColor};
pub use colorset::Colorset;
pub use command::EngineAction;
pub use engine::Engine;
pub use led::{Led, RgbLed};
pub use pattern::{Pattern, PatternArgs, PatternState};
pub use patterns::{PATTERN_COUNT, PatternId};
pub use random::Random;
pub use sim::{InputEvent, VirtualButton};
pub use storage::{Eeprom, MemoryEeprom, Storage, StorageError};
#[cfg(feature = "std")]
pub use time::TickPacer;
pub use time::{Clock, Tick, TimeSource};
pub use timer::Timer;

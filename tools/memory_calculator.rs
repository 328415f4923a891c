//! Memory calculator for helios-core
//!
//! Prints the RAM footprint of every engine component, so the cost of one
//! device context can be checked against the target's RAM before flashing.
//!
//! Usage:
//!   cargo run --bin memory_calculator

use helios_core::{
    Button, ButtonInput, Clock, Colorset, Engine, Led, MemoryEeprom, Pattern, PatternArgs, Random,
    RgbColor, RgbLed, Storage, Timer, VirtualButton,
};
use palette::Srgb;
use std::mem::size_of;

// ============================================================================
// Minimal hardware stand-ins
// ============================================================================

/// LED driver with no state, like a set of PWM channels behind a HAL handle
struct PwmLed;

impl RgbLed for PwmLed {
    fn set_color(&mut self, _color: RgbColor) {}
}

/// Button with no state, like a GPIO pin
struct GpioButton;

impl ButtonInput for GpioButton {
    fn is_pressed(&mut self) -> bool {
        false
    }
}

/// EEPROM driver with no RAM mirror
struct I2cEeprom;

impl helios_core::Eeprom for I2cEeprom {
    fn read_byte(&mut self, _address: usize) -> u8 {
        0
    }

    fn write_byte(&mut self, _address: usize, _data: u8) {}
}

fn print_header() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║            helios-core Memory Footprint Calculator             ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
}

fn print_value_sizes() {
    println!("Value Types:");
    println!("├─ RgbColor:                     {} bytes", size_of::<RgbColor>());
    println!("├─ Srgb<u8>:                     {} bytes", size_of::<Srgb<u8>>());
    println!("├─ Srgb (f32):                   {} bytes", size_of::<Srgb>());
    println!("├─ PatternArgs:                  {} bytes", size_of::<PatternArgs>());
    println!("├─ Colorset:                     {} bytes", size_of::<Colorset>());
    println!("├─ Timer:                        {} bytes", size_of::<Timer>());
    println!("├─ Clock:                        {} bytes", size_of::<Clock>());
    println!("└─ Random:                       {} bytes", size_of::<Random>());
    println!();
}

fn print_component_sizes() {
    println!("Components:");
    println!("├─ Pattern:                      {} bytes", size_of::<Pattern>());
    println!("├─ Button<GpioButton>:           {} bytes", size_of::<Button<GpioButton>>());
    println!("├─ Led<PwmLed>:                  {} bytes", size_of::<Led<PwmLed>>());
    println!("├─ Storage<I2cEeprom>:           {} bytes", size_of::<Storage<I2cEeprom>>());
    println!("└─ Storage<MemoryEeprom<256>>:   {} bytes", size_of::<Storage<MemoryEeprom<256>>>());
    println!();
}

fn print_virtual_button_table() {
    println!("VirtualButton<N> Memory Usage:");
    println!("┌──────────┬──────────────┐");
    println!("│ Queue    │ Total Size   │");
    println!("├──────────┼──────────────┤");
    for (capacity, size) in [
        (8, size_of::<VirtualButton<8>>()),
        (16, size_of::<VirtualButton<16>>()),
        (64, size_of::<VirtualButton<64>>()),
        (256, size_of::<VirtualButton<256>>()),
    ] {
        println!("│ {:^8} │ {:>10} B │", capacity, size);
    }
    println!("└──────────┴──────────────┘");
    println!();
}

fn print_engine_sizes() {
    let hardware = size_of::<Engine<GpioButton, PwmLed, I2cEeprom>>();
    let hosted = size_of::<Engine<VirtualButton<64>, PwmLed, MemoryEeprom<256>>>();
    println!("Engine (one device):");
    println!("├─ on hardware (pin, PWM, I2C):  {} bytes", hardware);
    println!("└─ hosted (virtual, RAM store):  {} bytes", hosted);
    println!();
}

fn main() {
    print_header();
    print_value_sizes();
    print_component_sizes();
    print_virtual_button_table();
    print_engine_sizes();
}

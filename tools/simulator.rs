//! Terminal simulator for helios-core
//!
//! Runs one device in real time at the configured tickrate and draws the LED
//! as a truecolor block whenever its color changes. Button input comes from
//! a script of single-character events.
//!
//! Usage:
//!   cargo run --bin simulator -- [SCRIPT] [TICKS]
//!
//! Script characters: p press, r release, t toggle, w wait one tick,
//! c short click, l long click. Anything else is ignored.
//!
//! Example, click to the second mode then randomize it:
//!   cargo run --bin simulator -- "c w l" 5000

use helios_core::{Engine, MemoryEeprom, RgbColor, RgbLed, TickPacer, VirtualButton};
use std::io::Write;

/// Draws the LED on stdout, one line per color change
struct TerminalLed {
    last: Option<RgbColor>,
    tick: u32,
}

impl RgbLed for TerminalLed {
    fn set_color(&mut self, color: RgbColor) {
        self.tick = self.tick.wrapping_add(1);
        if self.last == Some(color) {
            return;
        }
        self.last = Some(color);
        let mut out = std::io::stdout().lock();
        let _ = writeln!(
            out,
            "{:>8} \x1b[48;2;{};{};{}m      \x1b[0m #{:06X}",
            self.tick.wrapping_sub(1),
            color.red,
            color.green,
            color.blue,
            color.raw()
        );
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let script = args.next().unwrap_or_default();
    let ticks: u32 = args.next().and_then(|t| t.parse().ok()).unwrap_or(3000);

    let led = TerminalLed { last: None, tick: 0 };
    let mut engine = Engine::new(VirtualButton::<256>::new(), led, MemoryEeprom::<256>::new());
    let queued = engine.input_mut().queue_script(&script);
    println!("queued {} input events, running {} ticks", queued, ticks);

    let mut pacer = TickPacer::new();
    let mut mode = engine.cur_mode();
    for _ in 0..ticks {
        engine.tick();
        if engine.cur_mode() != mode {
            mode = engine.cur_mode();
            println!("-- mode {}", mode);
        }
        pacer.wait();
    }
}

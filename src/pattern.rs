//! The blink pattern engine.
//!
//! A [`Pattern`] turns a handful of tick durations and a [`Colorset`] into a
//! color per tick. It cycles through blink on/off pairs for each color of a
//! group, then an optional gap, an optional dash and a second gap after the
//! dash, skipping any phase whose duration is zero.
//!
//! ```text
//! DISABLED
//! BLINK_ON -> ON -> BLINK_OFF -> OFF -> BEGIN_GAP -> IN_GAP
//!   -> BEGIN_DASH -> IN_DASH -> BEGIN_GAP2 -> IN_GAP2 -> BLINK_ON ...
//! ```
//!
//! `BLINK_*`/`BEGIN_*` states act and arm the blink timer; the `ON`/`OFF`/`IN_*`
//! states wait on it. A single [`play`](Pattern::play) call may pass through
//! several states but stops at the first one that has to wait.

use crate::color::{HsvColor, RgbColor};
use crate::colorset::Colorset;
use crate::config::{COLORSET_SIZE, PATTERN_ARGS_SIZE, PATTERN_SIZE};
use crate::led::RgbLed;
use crate::time::TimeSource;
use crate::timer::Timer;

/// Upper bound on state transitions inside one `play` call.
const MAX_STATE_STEPS: u8 = 32;

/// No pattern flags.
pub const PATTERN_FLAGS_NONE: u8 = 0;

/// Pattern timing parameters, all in ticks. Zero disables a phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternArgs {
    pub on_dur: u8,
    pub off_dur: u8,
    pub gap_dur: u8,
    pub dash_dur: u8,
    /// Blinks per group; zero means one per color.
    pub group_size: u8,
    /// Per-tick channel step when blending; zero disables blending.
    pub blend_speed: u8,
    /// Complementary hue flips per blend color; zero disables flipping.
    pub num_flips: u8,
}

impl PatternArgs {
    pub const fn new(
        on_dur: u8,
        off_dur: u8,
        gap_dur: u8,
        dash_dur: u8,
        group_size: u8,
        blend_speed: u8,
        num_flips: u8,
    ) -> Self {
        Self {
            on_dur,
            off_dur,
            gap_dur,
            dash_dur,
            group_size,
            blend_speed,
            num_flips,
        }
    }

    /// Serializes the args in field order.
    pub const fn to_bytes(&self) -> [u8; PATTERN_ARGS_SIZE] {
        [
            self.on_dur,
            self.off_dur,
            self.gap_dur,
            self.dash_dur,
            self.group_size,
            self.blend_speed,
            self.num_flips,
        ]
    }

    pub const fn from_bytes(bytes: &[u8; PATTERN_ARGS_SIZE]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6])
    }
}

/// The blink state machine states, in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatternState {
    /// No on or dash duration, or no colors. Nothing is ever emitted.
    Disabled,
    BlinkOn,
    On,
    BlinkOff,
    Off,
    BeginGap,
    InGap,
    BeginDash,
    InDash,
    BeginGap2,
    InGap2,
}

impl PatternState {
    /// The next state in enum order. `InGap2` wraps to `BlinkOn`.
    fn next(self) -> Self {
        use PatternState::*;
        match self {
            Disabled => Disabled,
            BlinkOn => On,
            On => BlinkOff,
            BlinkOff => Off,
            Off => BeginGap,
            BeginGap => InGap,
            InGap => BeginDash,
            BeginDash => InDash,
            InDash => BeginGap2,
            BeginGap2 => InGap2,
            InGap2 => BlinkOn,
        }
    }
}

/// Outcome of one state step.
enum Flow {
    /// The LED is settled for this tick.
    Yield,
    /// Keep dispatching within the same tick.
    Continue,
}

/// A blink pattern: timing args, a private colorset and the playback state.
///
/// Changing the args or colorset does not reset playback. Call
/// [`init`](Self::init) afterwards if the pattern has to restart cleanly.
#[derive(Debug, Clone)]
pub struct Pattern {
    args: PatternArgs,
    flags: u8,
    colorset: Colorset,
    group_counter: u8,
    state: PatternState,
    blink_timer: Timer,
    cur: RgbColor,
    next: RgbColor,
    flip_index: u8,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(PatternArgs {
            on_dur: 1,
            ..PatternArgs::default()
        })
    }
}

impl Pattern {
    /// Creates a pattern with `args` and an empty colorset.
    pub fn new(args: PatternArgs) -> Self {
        Self {
            args,
            flags: PATTERN_FLAGS_NONE,
            colorset: Colorset::new(),
            group_counter: 0,
            state: PatternState::BlinkOn,
            blink_timer: Timer::new(),
            cur: RgbColor::default(),
            next: RgbColor::default(),
            flip_index: 0,
        }
    }

    /// Creates a pattern with `args` and `colorset`, already initialized.
    pub fn with_colorset(args: PatternArgs, colorset: Colorset) -> Self {
        let mut pat = Self::new(args);
        pat.colorset = colorset;
        pat.init();
        pat
    }

    /// Resets the cursor, state, group counter and blend colors from the
    /// current args and colorset.
    pub fn init(&mut self) {
        self.colorset.reset_index();

        // a dash consumes the first color so it goes first
        self.state = if self.args.dash_dur > 0 {
            PatternState::BeginDash
        } else {
            PatternState::BlinkOn
        };
        if (self.args.on_dur == 0 && self.args.dash_dur == 0) || self.colorset.is_empty() {
            self.state = PatternState::Disabled;
            #[cfg(feature = "defmt")]
            defmt::trace!("pattern disabled: {}", self.args);
        }
        self.group_counter = self.group_size();
        self.flip_index = 0;

        if self.args.blend_speed > 0 {
            self.cur = self.colorset.get_next();
            self.next = self.colorset.get_next();
        }
    }

    /// Advances the pattern by one tick, writing to `led` at most once.
    pub fn play<T: TimeSource, L: RgbLed>(&mut self, clock: &T, led: &mut L) {
        let now = clock.now();
        for _ in 0..MAX_STATE_STEPS {
            match self.step(now, led) {
                Flow::Yield => return,
                Flow::Continue => {}
            }
        }
    }

    fn step<L: RgbLed>(&mut self, now: u32, led: &mut L) -> Flow {
        use PatternState::*;
        match self.state {
            Disabled => Flow::Yield,
            BlinkOn => {
                if self.args.on_dur > 0 {
                    self.on_blink_on(led);
                    self.group_counter = self.group_counter.wrapping_sub(1);
                    self.next_state(self.args.on_dur, now);
                    return Flow::Yield;
                }
                self.state = BlinkOff;
                Flow::Continue
            }
            BlinkOff => {
                // keep blinking while the group has colors left, or always
                // when there is no gap or dash to break the cycle
                if self.group_counter > 0 || (self.args.gap_dur == 0 && self.args.dash_dur == 0) {
                    if self.args.off_dur > 0 {
                        led.clear();
                        self.next_state(self.args.off_dur, now);
                        return Flow::Yield;
                    }
                    if self.group_counter > 0 && self.args.on_dur > 0 {
                        self.state = BlinkOn;
                        return Flow::Continue;
                    }
                }
                self.state = BeginGap;
                Flow::Continue
            }
            BeginGap => {
                self.group_counter = self.group_size();
                if self.args.gap_dur > 0 {
                    led.clear();
                    self.next_state(self.args.gap_dur, now);
                    return Flow::Yield;
                }
                self.state = BeginDash;
                Flow::Continue
            }
            BeginDash => {
                if self.args.dash_dur > 0 {
                    led.set_color(self.colorset.get_next());
                    self.next_state(self.args.dash_dur, now);
                    return Flow::Yield;
                }
                self.state = BeginGap2;
                Flow::Continue
            }
            BeginGap2 => {
                if self.args.dash_dur > 0 && self.args.gap_dur > 0 {
                    led.clear();
                    self.next_state(self.args.gap_dur, now);
                    return Flow::Yield;
                }
                self.state = BlinkOn;
                Flow::Continue
            }
            On | Off | InGap | InDash | InGap2 => {
                if !self.blink_timer.alarm(now) {
                    return Flow::Yield;
                }
                self.state = self.after_wait();
                Flow::Continue
            }
        }
    }

    /// The state to move to once a timed state's alarm fires.
    fn after_wait(&self) -> PatternState {
        use PatternState::*;
        let state = self.state;
        if state == InGap2 || (state == Off && self.group_counter > 0) {
            // jump back for the next blink in the group
            if self.args.on_dur > 0 {
                BlinkOn
            } else if self.args.dash_dur > 0 {
                BeginDash
            } else {
                BeginGap
            }
        } else if state == Off && (self.group_counter == 0 || self.colorset.num_colors() == 1) {
            if self.group_counter > 0 { BlinkOn } else { BeginGap }
        } else {
            state.next()
        }
    }

    fn group_size(&self) -> u8 {
        if self.args.group_size > 0 {
            self.args.group_size
        } else {
            self.colorset
                .num_colors()
                .wrapping_sub((self.args.dash_dur != 0) as u8)
        }
    }

    fn next_state(&mut self, timing: u8, now: u32) {
        self.blink_timer.init(timing, now);
        self.state = self.state.next();
    }

    fn on_blink_on<L: RgbLed>(&mut self, led: &mut L) {
        if self.is_blend() {
            self.blend_blink_on(led);
            return;
        }
        led.set_color(self.colorset.get_next());
    }

    fn blend_blink_on<L: RgbLed>(&mut self, led: &mut L) {
        if self.cur == self.next {
            self.next = self.colorset.get_next();
        }
        let speed = self.args.blend_speed;
        interpolate(&mut self.cur.red, self.next.red, speed);
        interpolate(&mut self.cur.green, self.next.green, speed);
        interpolate(&mut self.cur.blue, self.next.blue, speed);

        let mut col = self.cur;
        let num_flips = self.args.num_flips;
        if num_flips > 0 {
            let shift = self.flip_index as u16 * (127 / num_flips as u16);
            if shift != 0 {
                col = HsvColor::from(col).shift_hue(shift as u8).into();
            }
            self.flip_index = ((self.flip_index as u16 + 1) % (num_flips as u16 + 1)) as u8;
        }
        led.set_color(col);
    }

    /// True when blink-on interpolates between colors.
    #[inline]
    pub fn is_blend(&self) -> bool {
        self.args.blend_speed > 0
    }

    pub fn args(&self) -> PatternArgs {
        self.args
    }

    /// Replaces the args without re-initializing.
    pub fn set_args(&mut self, args: PatternArgs) {
        self.args = args;
    }

    pub fn colorset(&self) -> &Colorset {
        &self.colorset
    }

    /// Mutable access to the pattern's own colorset.
    pub fn colorset_mut(&mut self) -> &mut Colorset {
        &mut self.colorset
    }

    /// Replaces the colorset without re-initializing.
    pub fn set_colorset(&mut self, colorset: Colorset) {
        self.colorset = colorset;
    }

    pub fn clear_colorset(&mut self) {
        self.colorset.clear();
    }

    /// Sets one color of the colorset and re-initializes.
    pub fn update_color(&mut self, index: u8, col: RgbColor) {
        self.colorset.set(index, col);
        self.init();
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u8) {
        self.flags = flags;
    }

    pub fn has_flags(&self, flags: u8) -> bool {
        self.flags & flags != 0
    }

    pub fn state(&self) -> PatternState {
        self.state
    }

    /// Blinks left in the current group.
    pub fn group_counter(&self) -> u8 {
        self.group_counter
    }

    /// The blend color as of the last blink-on, before any hue flip.
    pub fn blend_color(&self) -> RgbColor {
        self.cur
    }

    /// The color the blend is heading towards.
    pub fn blend_target(&self) -> RgbColor {
        self.next
    }

    /// Serializes args, flags and colorset in storage order.
    pub fn to_bytes(&self) -> [u8; PATTERN_SIZE] {
        let mut out = [0u8; PATTERN_SIZE];
        out[..PATTERN_ARGS_SIZE].copy_from_slice(&self.args.to_bytes());
        out[PATTERN_ARGS_SIZE] = self.flags;
        out[PATTERN_ARGS_SIZE + 1..].copy_from_slice(&self.colorset.to_bytes());
        out
    }

    /// Deserializes a pattern image. The result still needs [`init`](Self::init).
    pub fn from_bytes(bytes: &[u8; PATTERN_SIZE]) -> Self {
        let mut args = [0u8; PATTERN_ARGS_SIZE];
        args.copy_from_slice(&bytes[..PATTERN_ARGS_SIZE]);
        let mut set = [0u8; COLORSET_SIZE];
        set.copy_from_slice(&bytes[PATTERN_ARGS_SIZE + 1..]);

        let mut pat = Self::new(PatternArgs::from_bytes(&args));
        pat.flags = bytes[PATTERN_ARGS_SIZE];
        pat.colorset = Colorset::from_bytes(&set);
        pat
    }

    /// djb2 hash of the serialized pattern, used to seed randomization.
    pub fn crc32(&self) -> u32 {
        self.to_bytes()
            .iter()
            .fold(5381u32, |hash, &b| (hash << 5).wrapping_add(hash).wrapping_add(b as u32))
    }
}

/// Patterns are equal when their args, flags and colors match.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.args == other.args && self.flags == other.flags && self.colorset == other.colorset
    }
}

impl Eq for Pattern {}

/// Steps `current` towards `next` by at most `speed`, never overshooting.
fn interpolate(current: &mut u8, next: u8, speed: u8) {
    if *current < next {
        *current += (next - *current).min(speed);
    } else if *current > next {
        *current -= (*current - next).min(speed);
    }
}

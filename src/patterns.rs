//! Named pattern presets and the default modes.
//!
//! Every preset is just a [`PatternArgs`] value played by the one generic
//! [`Pattern`] engine.

use crate::color::RgbColor;
use crate::colors::*;
use crate::colorset::Colorset;
use crate::config::NUM_COLOR_SLOTS;
use crate::pattern::{Pattern, PatternArgs};
use crate::random::Random;

/// Preset identifiers, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatternId {
    Strobe,
    Hyperstrobe,
    Picostrobe,
    Strobie,
    Dops,
    Ultradops,
    StrobeGap,
    HyperGap,
    PicoGap,
    StrobieGap,
    DopsGap,
    UltraGap,
    Blinkie,
    Ghostcrush,
    DoubleDops,
    Chopper,
    DashGap,
    DashDops,
    DashCrush,
    UltraDash,
    GapCycle,
    DashCycle,
    Tracer,
    Ribbon,
    MiniRibbon,
    Blend,
    BlendStrobe,
    BlendStrobeGap,
    ComplementaryBlend,
    ComplementaryBlendStrobe,
    ComplementaryBlendStrobeGap,
    Solid,
}

/// Number of presets in the catalog.
pub const PATTERN_COUNT: u8 = PatternId::Solid as u8 + 1;

const fn args(on: u8, off: u8, gap: u8, dash: u8, group: u8, blend: u8, flips: u8) -> PatternArgs {
    PatternArgs::new(on, off, gap, dash, group, blend, flips)
}

/// Preset table indexed by [`PatternId`].
const PRESETS: [PatternArgs; PATTERN_COUNT as usize] = [
    args(6, 6, 0, 0, 0, 0, 0),       // strobe
    args(16, 20, 0, 0, 0, 0, 0),     // hyperstrobe
    args(6, 40, 0, 0, 0, 0, 0),      // picostrobe
    args(2, 28, 0, 0, 0, 0, 0),      // strobie
    args(1, 10, 0, 0, 0, 0, 0),      // dops
    args(1, 3, 0, 0, 0, 0, 0),       // ultradops
    args(6, 6, 25, 0, 0, 0, 0),      // strobe gap
    args(16, 20, 218, 0, 0, 0, 0),   // hyper gap
    args(6, 40, 90, 0, 0, 0, 0),     // pico gap
    args(2, 28, 100, 0, 0, 0, 0),    // strobie gap
    args(1, 10, 40, 0, 0, 0, 0),     // dops gap
    args(1, 3, 55, 0, 0, 0, 0),      // ultra gap
    args(3, 1, 65, 0, 0, 0, 0),      // blinkie
    args(3, 1, 18, 0, 0, 0, 0),      // ghostcrush
    args(1, 1, 10, 0, 2, 0, 0),      // doubledops
    args(1, 1, 10, 0, 2, 0, 0),      // chopper
    args(1, 1, 20, 20, 0, 0, 0),     // dashgap
    args(1, 10, 10, 18, 0, 0, 0),    // dashdops
    args(4, 1, 10, 18, 0, 0, 0),     // dashcrush
    args(1, 3, 3, 14, 0, 0, 0),      // ultradash
    args(2, 6, 12, 25, 2, 0, 0),     // gapcycle
    args(1, 3, 3, 30, 2, 0, 0),      // dashcycle
    args(3, 0, 0, 20, 1, 0, 0),      // tracer
    args(6, 0, 0, 0, 0, 0, 0),       // ribbon
    args(1, 0, 0, 0, 0, 0, 0),       // miniribbon
    args(2, 13, 0, 0, 0, 5, 0),      // blend
    args(6, 6, 0, 0, 0, 10, 0),      // blendstrobe
    args(6, 6, 25, 0, 0, 10, 0),     // blendstrobe gap
    args(2, 13, 0, 0, 0, 5, 1),      // complementary blend
    args(6, 6, 0, 0, 0, 10, 1),      // complementary blendstrobe
    args(6, 6, 25, 0, 0, 10, 1),     // complementary blendstrobe gap
    args(6, 6, 25, 0, 0, 0, 0),      // solid, same as strobe gap
];

impl PatternId {
    /// Looks up a preset by catalog index.
    pub fn from_index(index: u8) -> Option<Self> {
        use PatternId::*;
        const ALL: [PatternId; PATTERN_COUNT as usize] = [
            Strobe, Hyperstrobe, Picostrobe, Strobie, Dops, Ultradops, StrobeGap, HyperGap,
            PicoGap, StrobieGap, DopsGap, UltraGap, Blinkie, Ghostcrush, DoubleDops, Chopper,
            DashGap, DashDops, DashCrush, UltraDash, GapCycle, DashCycle, Tracer, Ribbon,
            MiniRibbon, Blend, BlendStrobe, BlendStrobeGap, ComplementaryBlend,
            ComplementaryBlendStrobe, ComplementaryBlendStrobeGap, Solid,
        ];
        ALL.get(index as usize).copied()
    }

    /// The timing args of this preset.
    pub const fn args(self) -> PatternArgs {
        PRESETS[self as usize]
    }
}

/// Replaces the args of `pat` with preset `id`, keeping its colorset.
pub fn make_pattern(id: PatternId, pat: &mut Pattern) {
    pat.set_args(id.args());
}

const DEFAULT_COLORSETS: [&[RgbColor]; 6] = [
    &[RGB_RED, RGB_ORANGE, RGB_YELLOW, RGB_TURQUOISE, RGB_BLUE, RGB_PINK],
    &[RGB_RED, RGB_CORAL_ORANGE_SAT_MEDIUM, RGB_ORANGE, RGB_YELLOW_SAT_LOW],
    &[RGB_PURPLE_SAT_MEDIUM, RGB_RED_BRI_LOWEST, RGB_MAGENTA_BRI_LOWEST, RGB_BLUE_BRI_LOWEST],
    &[RGB_BLUE_BRI_LOWEST, RGB_TURQUOISE, RGB_SEAFOAM_BRI_MEDIUM, RGB_ICE_BLUE_BRI_LOW],
    &[
        RGB_MAGENTA_BRI_LOWEST,
        RGB_ROYAL_BLUE_BRI_LOW,
        RGB_TURQUOISE,
        RGB_ROYAL_BLUE_BRI_LOW,
        RGB_MAGENTA_BRI_LOWEST,
        RGB_OFF,
    ],
    &[RGB_RED, RGB_HOT_PINK, RGB_ROYAL_BLUE, RGB_BLUE, RGB_GREEN, RGB_YELLOW],
];

const DEFAULT_ARGS: [PatternArgs; 6] = [
    args(2, 0, 40, 0, 0, 0, 0),  // lightside
    args(1, 9, 0, 0, 0, 0, 0),   // sauna
    args(9, 0, 0, 0, 0, 0, 0),   // ultraviolet
    args(1, 10, 10, 18, 0, 0, 0), // freezer burn
    args(3, 1, 0, 0, 0, 0, 0),   // ice blade
    args(1, 50, 0, 0, 0, 0, 0),  // rainbow glitter
];

/// Builds the factory pattern for mode `index`. Out-of-range indices wrap.
pub fn make_default(index: u8) -> Pattern {
    let index = index as usize % DEFAULT_ARGS.len();
    let mut pat = Pattern::new(DEFAULT_ARGS[index]);
    pat.set_colorset(Colorset::from_colors(DEFAULT_COLORSETS[index]));
    pat
}

/// Randomizes `pat` in place, seeded from its own serialized image.
///
/// The same pattern always randomizes to the same result.
pub fn randomize(pat: &mut Pattern) {
    let mut ctx = Random::new(pat.crc32());
    let rand_val = ctx.next_u8();
    let num_colors = ((rand_val as u16 + 1) % NUM_COLOR_SLOTS as u16) as u8;
    pat.colorset_mut().randomize_colors(&mut ctx, num_colors);
    if let Some(id) = PatternId::from_index(rand_val % PATTERN_COUNT) {
        make_pattern(id, pat);
    }
    pat.init();
    #[cfg(feature = "defmt")]
    defmt::debug!("randomized pattern: {}", pat.args());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_plays() {
        for i in 0..PATTERN_COUNT {
            let id = PatternId::from_index(i).unwrap();
            assert_eq!(id as u8, i);
            let a = id.args();
            assert!(a.on_dur > 0 || a.dash_dur > 0, "{:?} would be disabled", id);
        }
        assert_eq!(PatternId::from_index(PATTERN_COUNT), None);
    }

    #[test]
    fn complementary_variants_only_add_flips() {
        let plain = PatternId::Blend.args();
        let comp = PatternId::ComplementaryBlend.args();
        assert_eq!(comp.num_flips, 1);
        assert_eq!(PatternArgs { num_flips: 0, ..comp }, plain);
    }

    #[test]
    fn solid_plays_as_strobe_gap() {
        assert_eq!(PatternId::Solid.args(), PatternId::StrobeGap.args());
        let mut pat = Pattern::default();
        make_pattern(PatternId::Solid, &mut pat);
        assert_eq!(pat.args(), PatternArgs::new(6, 6, 25, 0, 0, 0, 0));
    }

    #[test]
    fn default_modes_have_colors() {
        for i in 0..6 {
            let pat = make_default(i);
            assert!(pat.colorset().num_colors() >= 4);
        }
    }
}

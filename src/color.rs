//! 8-bit RGB and HSV color types.
//!
//! Hue is a 256-unit wheel: one full turn is 256, and hue arithmetic wraps
//! modulo 256. Conversions are integer-only and deliberately lossy; converting
//! RGB to HSV and back does not reproduce every input.

use palette::Srgb;

#[inline]
const fn scale8(i: u8, scale: u8) -> u8 {
    ((i as u16 * scale as u16) >> 8) as u8
}

/// Which HSV to RGB conversion to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HsvAlgorithm {
    /// Six-region integer conversion.
    #[default]
    Generic,
    /// Equal-weight rainbow wheel with a boosted yellow band.
    Rainbow,
}

/// An RGB color with 8-bit channels.
///
/// All-zero is "empty" and doubles as the sentinel for an unprogrammed color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    /// Creates a color from channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from a packed `0xRRGGBB` value. The top byte is ignored.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            red: ((raw >> 16) & 0xFF) as u8,
            green: ((raw >> 8) & 0xFF) as u8,
            blue: (raw & 0xFF) as u8,
        }
    }

    /// Packs the color as `0xRRGGBB`.
    #[inline]
    pub const fn raw(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// True if all channels are zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Sets all channels to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Scales every channel by `brightness / 256`.
    #[inline]
    pub const fn scale_brightness(self, brightness: u8) -> Self {
        Self {
            red: scale8(self.red, brightness),
            green: scale8(self.green, brightness),
            blue: scale8(self.blue, brightness),
        }
    }

    /// Dims every channel by `fade_by / 256`.
    pub fn adjust_brightness(&mut self, fade_by: u8) -> Self {
        let keep = 256 - fade_by as u16;
        self.red = ((self.red as u16 * keep) >> 8) as u8;
        self.green = ((self.green as u16 * keep) >> 8) as u8;
        self.blue = ((self.blue as u16 * keep) >> 8) as u8;
        *self
    }

    /// Converts to HSV using the generic algorithm.
    pub fn to_hsv(self) -> HsvColor {
        rgb_to_hsv_generic(self)
    }
}

impl From<u32> for RgbColor {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<HsvColor> for RgbColor {
    fn from(hsv: HsvColor) -> Self {
        hsv_to_rgb_generic(hsv)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(col: RgbColor) -> Self {
        Srgb::new(col.red, col.green, col.blue)
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(col: Srgb<u8>) -> Self {
        Self::new(col.red, col.green, col.blue)
    }
}

/// Normalized channels in `0.0..=1.0`, for PWM drivers that want floats.
impl From<RgbColor> for Srgb {
    fn from(col: RgbColor) -> Self {
        Srgb::<u8>::from(col).into_format()
    }
}

/// An HSV color with 8-bit components on a 256-unit hue wheel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsvColor {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl HsvColor {
    #[inline]
    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Creates a color from a packed `0xHHSSVV` value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            hue: ((raw >> 16) & 0xFF) as u8,
            sat: ((raw >> 8) & 0xFF) as u8,
            val: (raw & 0xFF) as u8,
        }
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        ((self.hue as u32) << 16) | ((self.sat as u32) << 8) | self.val as u32
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.hue == 0 && self.sat == 0 && self.val == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Rotates the hue around the 256-unit wheel.
    #[inline]
    pub const fn shift_hue(self, shift: u8) -> Self {
        Self {
            hue: self.hue.wrapping_add(shift),
            ..self
        }
    }

    /// Converts to RGB with the chosen algorithm.
    pub fn to_rgb(self, algorithm: HsvAlgorithm) -> RgbColor {
        match algorithm {
            HsvAlgorithm::Generic => hsv_to_rgb_generic(self),
            HsvAlgorithm::Rainbow => hsv_to_rgb_rainbow(self),
        }
    }
}

impl From<RgbColor> for HsvColor {
    fn from(rgb: RgbColor) -> Self {
        rgb_to_hsv_generic(rgb)
    }
}

/// Generic six-region HSV to RGB conversion.
pub fn hsv_to_rgb_generic(hsv: HsvColor) -> RgbColor {
    if hsv.sat == 0 {
        return RgbColor::new(hsv.val, hsv.val, hsv.val);
    }

    let region = hsv.hue / 43;
    let remainder = (hsv.hue - region * 43) as u16 * 6;

    let val = hsv.val as u16;
    let sat = hsv.sat as u16;
    let p = ((val * (255 - sat)) >> 8) as u8;
    let q = ((val * (255 - ((sat * remainder) >> 8))) >> 8) as u8;
    let t = ((val * (255 - ((sat * (255 - remainder)) >> 8))) >> 8) as u8;

    match region {
        0 => RgbColor::new(hsv.val, t, p),
        1 => RgbColor::new(q, hsv.val, p),
        2 => RgbColor::new(p, hsv.val, t),
        3 => RgbColor::new(p, q, hsv.val),
        4 => RgbColor::new(t, p, hsv.val),
        _ => RgbColor::new(hsv.val, p, q),
    }
}

/// Full rainbow HSV to RGB conversion.
///
/// Every eighth of the wheel gets equal width, which widens yellow compared
/// to the generic conversion. Green is scaled down to match typical LEDs.
pub fn hsv_to_rgb_rainbow(hsv: HsvColor) -> RgbColor {
    const GREEN_SCALE: u8 = 185;

    let hue = hsv.hue;
    let offset8 = (hue & 0x1F) << 3;
    let third = scale8(offset8, 85);
    let two_thirds = scale8(offset8, 170);

    let (mut r, mut g, mut b) = match hue >> 5 {
        // red -> orange
        0 => (255 - third, third, 0),
        // orange -> yellow
        1 => (171, 85 + third, 0),
        // yellow -> green
        2 => (171 - two_thirds, 170 + third, 0),
        // green -> aqua
        3 => (0, 255 - third, third),
        // aqua -> blue
        4 => (0, 171 - two_thirds, 85 + two_thirds),
        // blue -> purple
        5 => (third, 0, 255 - third),
        // purple -> pink
        6 => (85 + third, 0, 171 - third),
        // pink -> red
        _ => (170 + third, 0, 85 - third),
    };

    g = scale8(g, GREEN_SCALE);

    if hsv.sat != 255 {
        if hsv.sat == 0 {
            r = 255;
            g = 255;
            b = 255;
        } else {
            if r != 0 {
                r = scale8(r, hsv.sat) + 1;
            }
            if g != 0 {
                g = scale8(g, hsv.sat) + 1;
            }
            if b != 0 {
                b = scale8(b, hsv.sat) + 1;
            }
            let desat = 255 - hsv.sat;
            let floor = scale8(desat, desat);
            r = r.wrapping_add(floor);
            g = g.wrapping_add(floor);
            b = b.wrapping_add(floor);
        }
    }

    if hsv.val != 255 {
        let val = scale8(hsv.val, hsv.val);
        if val == 0 {
            r = 0;
            g = 0;
            b = 0;
        } else {
            if r != 0 {
                r = scale8(r, val) + 1;
            }
            if g != 0 {
                g = scale8(g, val) + 1;
            }
            if b != 0 {
                b = scale8(b, val) + 1;
            }
        }
    }

    RgbColor::new(r, g, b)
}

/// Generic RGB to HSV conversion.
///
/// Achromatic input (all channels equal) always reports hue 0 and sat 0.
pub fn rgb_to_hsv_generic(rgb: RgbColor) -> HsvColor {
    let min = rgb.red.min(rgb.green).min(rgb.blue);
    let max = rgb.red.max(rgb.green).max(rgb.blue);

    if max == 0 {
        return HsvColor::new(0, 0, 0);
    }

    let delta = (max - min) as i32;
    let sat = (255 * delta / max as i32) as u8;
    if sat == 0 {
        return HsvColor::new(0, 0, max);
    }

    let (r, g, b) = (rgb.red as i32, rgb.green as i32, rgb.blue as i32);
    let hue = if max == rgb.red {
        43 * (g - b) / delta
    } else if max == rgb.green {
        85 + 43 * (b - r) / delta
    } else {
        171 + 43 * (r - g) / delta
    };

    // Negative hues wrap onto the 256-unit wheel.
    HsvColor::new(hue as u8, sat, max)
}

//! Named color constants and HSV convenience helpers.
//!
//! The `_SAT_*` and `_BRI_*` variants are pre-computed desaturated and dimmed
//! versions of the base colors, tuned by eye on the device LED.

use crate::color::{HsvColor, RgbColor};

pub const RGB_OFF: RgbColor = RgbColor::from_raw(0x000000);
pub const RGB_WHITE: RgbColor = RgbColor::from_raw(0xFFFFFF);
pub const RGB_RED: RgbColor = RgbColor::from_raw(0xFF0000);
pub const RGB_CORAL_ORANGE: RgbColor = RgbColor::from_raw(0xFF1E00);
pub const RGB_ORANGE: RgbColor = RgbColor::from_raw(0xFF3C00);
pub const RGB_YELLOW: RgbColor = RgbColor::from_raw(0xFF7800);
pub const RGB_LIME_GREEN: RgbColor = RgbColor::from_raw(0x59FF00);
pub const RGB_GREEN: RgbColor = RgbColor::from_raw(0x00FF00);
pub const RGB_SEAFOAM: RgbColor = RgbColor::from_raw(0x00FF3C);
pub const RGB_TURQUOISE: RgbColor = RgbColor::from_raw(0x00FFD1);
pub const RGB_ICE_BLUE: RgbColor = RgbColor::from_raw(0x00A7FF);
pub const RGB_LIGHT_BLUE: RgbColor = RgbColor::from_raw(0x0047FF);
pub const RGB_BLUE: RgbColor = RgbColor::from_raw(0x0000FF);
pub const RGB_ROYAL_BLUE: RgbColor = RgbColor::from_raw(0x1D00FF);
pub const RGB_PURPLE: RgbColor = RgbColor::from_raw(0x8300FF);
pub const RGB_PINK: RgbColor = RgbColor::from_raw(0xD200FF);
pub const RGB_HOT_PINK: RgbColor = RgbColor::from_raw(0xFF00B4);
pub const RGB_MAGENTA: RgbColor = RgbColor::from_raw(0xFF003C);

pub const RGB_WHITE_BRI_MEDIUM: RgbColor = RgbColor::from_raw(0x787878);
pub const RGB_SEAFOAM_BRI_MEDIUM: RgbColor = RgbColor::from_raw(0x00781C);

pub const RGB_WHITE_BRI_LOW: RgbColor = RgbColor::from_raw(0x3C3C3C);
pub const RGB_ICE_BLUE_BRI_LOW: RgbColor = RgbColor::from_raw(0x00273C);
pub const RGB_ROYAL_BLUE_BRI_LOW: RgbColor = RgbColor::from_raw(0x06003C);

pub const RGB_RED_BRI_LOWEST: RgbColor = RgbColor::from_raw(0x0A0000);
pub const RGB_BLUE_BRI_LOWEST: RgbColor = RgbColor::from_raw(0x00000A);
pub const RGB_MAGENTA_BRI_LOWEST: RgbColor = RgbColor::from_raw(0x0A0002);

pub const RGB_CORAL_ORANGE_SAT_MEDIUM: RgbColor = RgbColor::from_raw(0xFF3C22);
pub const RGB_PURPLE_SAT_MEDIUM: RgbColor = RgbColor::from_raw(0x9422FF);
pub const RGB_YELLOW_SAT_LOW: RgbColor = RgbColor::from_raw(0xFFA555);

/// Creates an RGB color from HSV components with the generic conversion.
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> RgbColor {
    HsvColor::new(hue, sat, val).into()
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: u8) -> RgbColor {
    hsv(hue, 255, 255)
}

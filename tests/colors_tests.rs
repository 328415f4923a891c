//! Integration tests for color values, conversions and colorsets

use helios_core::color::{hsv_to_rgb_generic, hsv_to_rgb_rainbow, rgb_to_hsv_generic};
use helios_core::colors::{self, RGB_BLUE, RGB_GREEN, RGB_OFF, RGB_RED, RGB_WHITE};
use helios_core::config::NUM_COLOR_SLOTS;
use helios_core::{Colorset, HsvAlgorithm, HsvColor, Random, RgbColor, Srgb};

#[test]
fn hsv_creates_primary_colors() {
    assert_eq!(hsv_to_rgb_generic(HsvColor::new(0, 255, 255)), RGB_RED);

    let green = hsv_to_rgb_generic(HsvColor::new(85, 255, 255));
    assert_eq!(green.green, 255);
    assert!(green.red < 8 && green.blue == 0);

    let blue = hsv_to_rgb_generic(HsvColor::new(171, 255, 255));
    assert_eq!(blue.blue, 255);
    assert!(blue.red == 0 && blue.green < 8);
}

#[test]
fn hsv_handles_saturation_and_value() {
    assert_eq!(colors::hsv(0, 0, 128), RgbColor::new(128, 128, 128));
    assert_eq!(colors::hsv(77, 255, 0), RGB_OFF);
}

#[test]
fn rgb_to_hsv_of_primaries() {
    assert_eq!(rgb_to_hsv_generic(RGB_RED), HsvColor::new(0, 255, 255));
    assert_eq!(rgb_to_hsv_generic(RGB_GREEN), HsvColor::new(85, 255, 255));
    assert_eq!(rgb_to_hsv_generic(RGB_BLUE), HsvColor::new(171, 255, 255));
    assert_eq!(rgb_to_hsv_generic(RGB_OFF), HsvColor::new(0, 0, 0));
}

#[test]
fn achromatic_hue_is_lost_in_round_trip() {
    let gray = HsvColor::new(100, 0, 50);
    let rgb = gray.to_rgb(HsvAlgorithm::Generic);
    assert_eq!(rgb, RgbColor::new(50, 50, 50));
    // hue does not survive, by construction
    assert_eq!(HsvColor::from(rgb), HsvColor::new(0, 0, 50));
}

#[test]
fn near_gray_does_not_round_trip() {
    let col = RgbColor::new(200, 200, 201);
    let back: RgbColor = rgb_to_hsv_generic(col).into();
    assert_ne!(back, col);
    assert_eq!(back, RgbColor::new(199, 200, 201));
}

#[test]
fn rainbow_differs_from_generic_but_keeps_red() {
    let red = hsv_to_rgb_rainbow(HsvColor::new(0, 255, 255));
    assert_eq!(red, RGB_RED);
    let yellow_generic = hsv_to_rgb_generic(HsvColor::new(64, 255, 255));
    let yellow_rainbow = hsv_to_rgb_rainbow(HsvColor::new(64, 255, 255));
    assert_ne!(yellow_generic, yellow_rainbow);
}

#[test]
fn hue_shift_wraps_on_256_wheel() {
    let hsv = HsvColor::new(200, 255, 255).shift_hue(100);
    assert_eq!(hsv.hue, 44);
}

#[test]
fn brightness_scaling_uses_shift() {
    assert_eq!(RGB_WHITE.scale_brightness(128), RgbColor::new(127, 127, 127));
    assert_eq!(RGB_WHITE.scale_brightness(255), RgbColor::new(254, 254, 254));
    assert_eq!(RGB_WHITE.scale_brightness(0), RGB_OFF);

    let mut col = RgbColor::new(200, 100, 0);
    assert_eq!(col.adjust_brightness(128), RgbColor::new(100, 50, 0));
    assert_eq!(col, RgbColor::new(100, 50, 0));
}

#[test]
fn palette_interop() {
    let srgb: Srgb<u8> = RGB_RED.into();
    assert_eq!(srgb, Srgb::new(255u8, 0, 0));
    let float: Srgb = RGB_BLUE.into();
    assert!((float.blue - 1.0).abs() < 1e-6);
    assert_eq!(RgbColor::from(Srgb::new(1u8, 2, 3)), RgbColor::new(1, 2, 3));
}

// ============================================================================
// Colorset
// ============================================================================

#[test]
fn get_next_wraps_after_count() {
    let palette = [
        RGB_RED,
        RGB_GREEN,
        RGB_BLUE,
        RGB_WHITE,
        colors::RGB_PINK,
        colors::RGB_YELLOW,
        colors::RGB_TURQUOISE,
        colors::RGB_ORANGE,
    ];
    for count in 1..=8usize {
        let mut set = Colorset::from_colors(&palette[..count]);
        let held = set.num_colors() as usize;
        assert_eq!(held, count.min(NUM_COLOR_SLOTS));
        let first = set.get_next();
        for _ in 1..held {
            set.get_next();
        }
        assert_eq!(set.get_next(), first, "count {}", count);
    }
}

#[test]
fn empty_colorset_is_safe() {
    let mut set = Colorset::new();
    assert_eq!(set.get_next(), RgbColor::default());
    assert_eq!(set.get_prev(), RgbColor::default());
    assert_eq!(set.cur_index(), 0);
    set.remove_color(0);
    assert!(set.is_empty());
}

#[test]
fn set_overwrites_appends_or_ignores() {
    let mut set = Colorset::from_colors(&[RGB_RED]);
    set.set(0, RGB_GREEN);
    set.set(1, RGB_BLUE);
    set.set(5, RGB_WHITE);
    assert_eq!(set.colors(), &[RGB_GREEN, RGB_BLUE]);

    let mut full = Colorset::from_colors(&[RGB_RED; NUM_COLOR_SLOTS]);
    full.set(NUM_COLOR_SLOTS as u8, RGB_BLUE);
    assert_eq!(full.num_colors() as usize, NUM_COLOR_SLOTS);
}

#[test]
fn remove_shifts_and_clamps_cursor() {
    let mut set = Colorset::from_colors(&[RGB_RED, RGB_GREEN, RGB_BLUE]);
    set.get_next();
    set.get_next();
    assert_eq!(set.cur_index(), 2);
    set.remove_color(0);
    assert_eq!(set.colors(), &[RGB_GREEN, RGB_BLUE]);
    assert_eq!(set.cur_index(), 0);
    assert_eq!(set.get_next(), RGB_GREEN);
}

#[test]
fn randomize_is_deterministic_per_seed() {
    let mut a = Colorset::new();
    let mut b = Colorset::new();
    a.randomize_colors(&mut Random::new(99), 0);
    b.randomize_colors(&mut Random::new(99), 0);
    assert_eq!(a, b);
    assert!(!a.is_empty() && a.num_colors() as usize <= NUM_COLOR_SLOTS);

    let mut c = Colorset::new();
    c.randomize_colors(&mut Random::new(7), 4);
    assert_eq!(c.num_colors(), 4);
    for col in c.colors() {
        let hsv = HsvColor::from(*col);
        assert!(hsv.val >= 250);
    }
}

pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::blend8,
};

/// Saturation used by [`fill_rainbow`], slightly below full like `FastLED`
const RAINBOW_SATURATION: u8 = 240;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert an HSV triple into RGB
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Fill every LED with one color
#[inline]
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    leds.fill(color);
}

/// Fill LEDs with a rainbow starting at `initial_hue`
///
/// Each following LED advances the hue by `delta_hue`, wrapping around the
/// color wheel.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv(hue, RAINBOW_SATURATION, 255);
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

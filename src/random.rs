//! Reproducible randomness shared by every node
//!
//! All values are pure functions of `(epoch, draw_index)`. Each draw seeds a
//! fresh `ChaCha8` stream with the epoch and reads the word at `draw_index`,
//! which is the same value a generator would return after discarding
//! `draw_index` outputs. Nodes therefore agree on colors without exchanging
//! them, no matter when or in which order they ask.

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use crate::color::{Rgb, hsv};
use crate::context::Epoch;

/// Number of distinct hues a random color can take
pub const HUE_RANGE: u32 = 255;

/// Raw 32-bit draw number `index` of the epoch stream
pub fn draw(epoch: Epoch, index: u32) -> u32 {
    let mut rng = ChaCha8Rng::seed_from_u64(epoch);
    rng.set_word_pos(u128::from(index));
    rng.next_u32()
}

/// Draw a value in `[min, max)`
///
/// Returns `min` when the range is empty.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn draw_range(epoch: Epoch, index: u32, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    let span = max.abs_diff(min);
    min.wrapping_add((draw(epoch, index) % span) as i32)
}

/// Fully saturated random color for the epoch
#[allow(clippy::cast_possible_truncation)]
pub fn color_for(epoch: Epoch, draw_index: u32) -> Rgb {
    let hue = (draw(epoch, draw_index) % HUE_RANGE) as u8;
    hsv(hue, 255, 255)
}

/// Two colors roughly opposite on the color wheel
///
/// Consumes draws `first_index` and `first_index + 1`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn contrasting_colors_for(epoch: Epoch, first_index: u32) -> (Rgb, Rgb) {
    let first_hue = draw_range(epoch, first_index, 0, 255);
    let offset = draw_range(epoch, first_index.wrapping_add(1), 0, 180) - 90;
    let second_hue = (first_hue + 128 + offset).rem_euclid(255);

    (
        hsv(first_hue as u8, 255, 255),
        hsv(second_hue as u8, 255, 255),
    )
}

/// Random direction, `1` or `-1`
pub fn direction_for(epoch: Epoch, index: u32) -> i32 {
    if draw_range(epoch, index, 0, 2) == 1 { 1 } else { -1 }
}

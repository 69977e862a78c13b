//! Rainbow animations
//!
//! Provides three variants:
//! - `RainbowScanAnimation`: rainbow whose start hue follows shared time
//! - `RainbowFadeAnimation`: whole strip one hue, cycling with shared time
//! - `RainbowAnimation`: drifting rainbow with speed and width picked per
//!   epoch

use super::Animation;
use crate::{
    color::{Rgb, fill_rainbow, fill_solid, hsv},
    context::{Epoch, RenderContext},
    math8::fraction8,
    random::{direction_for, draw_range},
    signal::frame_number,
};

const SCAN_PERIOD_MS: u64 = 1_024;
const SCAN_HUE_DELTA: u8 = 32;

const FADE_PERIOD_MS: u64 = 4_200;
const FADE_VALUE: u8 = 128;

const DRIFT_FRAME_MS: u64 = 20;
const MIN_HUE_STEP: i32 = 4;
const MAX_HUE_STEP: i32 = 15;
const MIN_SPEED: i32 = 3;
const MAX_SPEED: i32 = 12;

#[derive(Debug, Clone, Default)]
pub struct RainbowScanAnimation;

impl RainbowScanAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for RainbowScanAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let start_hue = fraction8(ctx.raw_time_ms(), SCAN_PERIOD_MS);
        fill_rainbow(leds, start_hue, SCAN_HUE_DELTA);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RainbowFadeAnimation;

impl RainbowFadeAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for RainbowFadeAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let hue = fraction8(ctx.raw_time_ms(), FADE_PERIOD_MS);
        fill_solid(leds, hsv(hue, 255, FADE_VALUE));
    }
}

/// Rainbow drifting along the strip
///
/// Offset, speed, direction and width are drawn from the epoch when the
/// animation is built.
#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    /// Hue of the first LED at frame 0
    offset: i32,
    /// Hue shift per frame, negative to drift backwards
    speed: i32,
    /// Hue difference between neighbouring LEDs
    hue_step: u8,
}

impl RainbowAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(epoch: Epoch) -> Self {
        Self {
            offset: draw_range(epoch, 0, 0, 255),
            speed: draw_range(epoch, 1, MIN_SPEED, MAX_SPEED) * direction_for(epoch, 2),
            hue_step: draw_range(epoch, 3, MIN_HUE_STEP, MAX_HUE_STEP) as u8,
        }
    }
}

impl Animation for RainbowAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let frame = frame_number(ctx, DRIFT_FRAME_MS) as i64;
        let hue = (i64::from(self.offset) + i64::from(self.speed) * frame).rem_euclid(255);
        fill_rainbow(leds, hue as u8, self.hue_step);
    }
}

//! Whole strip pulsing between two contrasting colors

use super::Animation;
use crate::{
    color::{Rgb, blend_colors, fill_solid},
    context::{Epoch, RenderContext},
    random::{contrasting_colors_for, draw_range},
    signal::frame_number,
};

const FRAME_MS: u64 = 20;
const MIN_SPEED: i32 = 5;
const MAX_SPEED: i32 = 15;

#[derive(Debug, Clone)]
pub struct PulseAnimation {
    from: Rgb,
    to: Rgb,
    /// Degrees advanced per frame
    speed: i32,
    /// Angle at frame 0, in degrees
    start_angle: i32,
}

impl PulseAnimation {
    pub fn new(epoch: Epoch) -> Self {
        let (from, to) = contrasting_colors_for(epoch, 0);
        Self {
            from,
            to,
            speed: draw_range(epoch, 2, MIN_SPEED, MAX_SPEED),
            start_angle: draw_range(epoch, 3, 0, 360),
        }
    }

    /// Mix amount for a frame, `|sin(angle)|` scaled to 0-255
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    fn mix_amount(&self, frame: u64) -> u8 {
        let angle = (i64::from(self.start_angle) + i64::from(self.speed) * frame as i64)
            .rem_euclid(360);
        let radians = (angle as f32).to_radians();
        (libm::fabsf(libm::sinf(radians)) * 255.0) as u8
    }
}

impl Animation for PulseAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let amount = self.mix_amount(frame_number(ctx, FRAME_MS));
        fill_solid(leds, blend_colors(self.from, self.to, amount));
    }
}

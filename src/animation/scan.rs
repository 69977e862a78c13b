//! Single pixel bouncing between the ends of the strip

use super::Animation;
use crate::{
    color::{BLACK, Rgb, fill_solid},
    context::RenderContext,
    signal::{cylon_signal, frame_number},
};

const FRAME_MS: u64 = 20;

#[derive(Debug, Clone, Default)]
pub struct ScanAnimation;

impl ScanAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for ScanAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let position = cylon_signal(frame_number(ctx, FRAME_MS), 1, ctx.led_count());

        fill_solid(leds, BLACK);
        if let Some(led) = leds.get_mut(position) {
            *led = ctx.color(0);
        }
    }
}

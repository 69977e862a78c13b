//! A split point sweeps along the strip, swapping colors every pass

use super::Animation;
use crate::{
    color::{Rgb, fill_solid},
    context::RenderContext,
    signal::{frame_number, odometer_signal},
};

const FRAME_MS: u64 = 20;

#[derive(Debug, Clone, Default)]
pub struct WipeAnimation;

impl WipeAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for WipeAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let frame = frame_number(ctx, FRAME_MS);
        let led_count = ctx.led_count();

        let split = odometer_signal(frame, 1, led_count).min(leds.len());
        #[allow(clippy::cast_possible_truncation)]
        let fill_index = odometer_signal(frame, led_count as u64, 2) as u32;
        let other_index = 1 - fill_index;

        let (head, tail) = leds.split_at_mut(split);
        fill_solid(head, ctx.color(fill_index));
        fill_solid(tail, ctx.color(other_index));
    }
}

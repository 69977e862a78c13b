//! Two contrasting colors alternating every second of shared time

use super::Animation;
use crate::{
    color::{Rgb, fill_solid},
    context::{Epoch, RenderContext},
    random::contrasting_colors_for,
    signal::odometer_signal,
};

const PERIOD_MS: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct FlashAnimation {
    colors: (Rgb, Rgb),
}

impl FlashAnimation {
    pub fn new(epoch: Epoch) -> Self {
        Self {
            colors: contrasting_colors_for(epoch, 0),
        }
    }
}

impl Animation for FlashAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let color = if odometer_signal(ctx.raw_time_ms(), PERIOD_MS, 2) == 0 {
            self.colors.0
        } else {
            self.colors.1
        };
        fill_solid(leds, color);
    }
}

//! Blocks dropping down the strip and stacking up at its end
//!
//! Once the strip is full the colors swap and, after a short pause, the
//! stack starts again. The simulation is stepped to the epoch's frame
//! number on every render, so nodes that joined late or render at a
//! different rate still show the same frame.

use super::Animation;
use crate::{
    color::{Rgb, fill_solid},
    context::{Epoch, RenderContext},
    random::{contrasting_colors_for, draw_range},
    signal::frame_number,
};

const FRAME_MS: u64 = 30;

const MIN_BLOCK_WIDTH: i32 = 1;
const MAX_BLOCK_WIDTH: i32 = 1;

const MIN_SPEED: i32 = 1;
const MAX_SPEED: i32 = 1;

/// Frames to hold a full strip before swapping colors
const PAUSE_FRAMES: u32 = 10;

#[derive(Debug, Clone)]
pub struct DropAnimation {
    /// Color of the dropping block and the stack
    block_color: Rgb,
    /// Color of the empty space
    background: Rgb,
    speed: i32,
    block_width: i32,
    /// Number of LEDs stacked at the end of the strip
    fill_level: i32,
    /// Position of the first LED of the falling block, negative when off the strip
    block_position: i32,
    pause_timer: u32,
    /// Frames simulated so far
    frame: u64,
}

impl DropAnimation {
    pub fn new(epoch: Epoch) -> Self {
        let (block_color, background) = contrasting_colors_for(epoch, 0);
        Self {
            block_color,
            background,
            speed: draw_range(epoch, 2, MIN_SPEED, MAX_SPEED).max(1),
            block_width: draw_range(epoch, 3, MIN_BLOCK_WIDTH, MAX_BLOCK_WIDTH).max(1),
            fill_level: 0,
            block_position: 0,
            pause_timer: 0,
            frame: 0,
        }
    }

    /// Advance the simulation by one frame
    fn step(&mut self, led_count: i32) {
        if self.pause_timer > 0 {
            self.pause_timer -= 1;
            return;
        }

        if self.fill_level >= led_count {
            core::mem::swap(&mut self.block_color, &mut self.background);
            self.fill_level = 0;
            self.block_position = -self.block_width;
            self.pause_timer = PAUSE_FRAMES;
            return;
        }

        let landing = led_count - self.fill_level - self.block_width;
        if self.block_position >= landing {
            self.fill_level += self.block_width;
            self.block_position = -self.block_width;
        } else {
            self.block_position = (self.block_position + self.speed).min(landing);
        }
    }

    fn paint(&self, leds: &mut [Rgb], led_count: i32) {
        fill_solid(leds, self.background);

        let stack_start = usize::try_from(led_count - self.fill_level).unwrap_or(0);
        if let Some(stack) = leds.get_mut(stack_start..) {
            fill_solid(stack, self.block_color);
        }

        for offset in 0..self.block_width {
            let Ok(index) = usize::try_from(self.block_position + offset) else {
                continue;
            };
            if let Some(led) = leds.get_mut(index) {
                *led = self.block_color;
            }
        }
    }
}

impl Animation for DropAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let led_count = i32::try_from(ctx.led_count()).unwrap_or(i32::MAX);
        let target = frame_number(ctx, FRAME_MS);

        while self.frame < target {
            self.step(led_count);
            self.frame += 1;
        }

        self.paint(leds, led_count);
    }
}

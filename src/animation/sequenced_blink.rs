//! Nodes take turns lighting up in rank order
//!
//! Each frame selects one rank; only the node holding that rank lights its
//! strip. No messages are exchanged, every node compares the selected rank
//! with its own.

use super::Animation;
use crate::{
    color::{BLACK, Rgb, fill_solid},
    context::RenderContext,
    signal::{frame_number, odometer_signal},
};

#[derive(Debug, Clone, Default)]
pub struct SequencedBlinkAnimation;

impl SequencedBlinkAnimation {
    /// Length of one turn
    pub const FRAME_MS: u64 = 250;

    pub const fn new() -> Self {
        Self
    }
}

impl Animation for SequencedBlinkAnimation {
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let selected = odometer_signal(frame_number(ctx, Self::FRAME_MS), 1, ctx.group_size());

        // Unknown rank never matches and stays dark
        let color = if ctx.rank() == Some(selected) {
            ctx.color(0)
        } else {
            BLACK
        };
        fill_solid(leds, color);
    }
}

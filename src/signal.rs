//! Integer signal generators shared by all strategies
//!
//! Every function here is total: zero ranges, prescalers and frame
//! durations are clamped to 1 instead of dividing by zero.

use crate::context::RenderContext;

/// Wrapping counter: `(counter / prescaler) mod range`
///
/// Cycles through `0..range`, advancing once every `prescaler` counts.
#[allow(clippy::cast_possible_truncation)]
pub const fn odometer_signal(counter: u64, prescaler: u64, range: usize) -> usize {
    let prescaler = if prescaler == 0 { 1 } else { prescaler };
    let range = if range == 0 { 1 } else { range as u64 };
    ((counter / prescaler) % range) as usize
}

/// Bouncing counter over `0..range`
///
/// Walks up to `range - 1` and back down again without repeating the end
/// points, so the period is `2 * range - 2` counts.
pub const fn cylon_signal(counter: u64, prescaler: u64, range: usize) -> usize {
    if range <= 1 {
        return 0;
    }
    let period = range.saturating_mul(2) - 2;
    let value = odometer_signal(counter, prescaler, period);
    if value >= range { period - value } else { value }
}

/// Index of the current frame within the epoch
///
/// Frames are `frame_duration_ms` long and restart from 0 at every epoch
/// boundary.
pub const fn frame_number(ctx: &RenderContext, frame_duration_ms: u64) -> u64 {
    let frame_duration_ms = if frame_duration_ms == 0 {
        1
    } else {
        frame_duration_ms
    };
    ctx.since_epoch_ms() / frame_duration_ms
}

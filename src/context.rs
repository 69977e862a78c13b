//! Per-frame rendering context
//!
//! Built from shared time and a membership snapshot. Two nodes fed the same
//! inputs compute the same context, which is what keeps their animations in
//! step.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::config::MAX_EPOCH_DURATION_MS;
use crate::membership::MembershipSnapshot;
use crate::random::color_for;

/// Number of animation periods elapsed since mesh time zero
pub type Epoch = u64;

const US_PER_MS: u64 = 1_000;

/// Everything a strategy may read while rendering one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    led_count: usize,
    raw_time_us: u64,
    epoch: Epoch,
    since_epoch_us: u64,
    epoch_duration_ms: u64,
    group_size: usize,
    rank: Option<usize>,
}

impl RenderContext {
    /// Derive the context for one frame
    ///
    /// The epoch duration is clamped to `1..=MAX_EPOCH_DURATION_MS`
    /// milliseconds. A node missing from its own
    /// snapshot gets an unknown rank and keeps rendering.
    pub fn compute<const N: usize>(
        raw_time_us: u64,
        snapshot: &MembershipSnapshot<N>,
        led_count: usize,
        epoch_duration: Duration,
    ) -> Self {
        let epoch_duration_ms = epoch_duration.as_millis().clamp(1, MAX_EPOCH_DURATION_MS);
        let epoch = raw_time_us / US_PER_MS / epoch_duration_ms;
        let since_epoch_us = raw_time_us - epoch * epoch_duration_ms * US_PER_MS;

        let rank = match snapshot.rank() {
            Ok(rank) => Some(rank),
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[RenderContext.compute] {}", error);
                #[cfg(not(feature = "esp32-log"))]
                let _ = error;
                None
            }
        };

        Self {
            led_count,
            raw_time_us,
            epoch,
            since_epoch_us,
            epoch_duration_ms,
            group_size: snapshot.group_size(),
            rank,
        }
    }

    /// Number of LEDs in the output buffer
    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Shared mesh time in microseconds
    pub const fn raw_time_us(&self) -> u64 {
        self.raw_time_us
    }

    /// Shared mesh time in milliseconds
    pub const fn raw_time_ms(&self) -> u64 {
        self.raw_time_us / US_PER_MS
    }

    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Time since the current epoch started, in microseconds
    pub const fn since_epoch_us(&self) -> u64 {
        self.since_epoch_us
    }

    /// Time since the current epoch started, in milliseconds
    pub const fn since_epoch_ms(&self) -> u64 {
        self.since_epoch_us / US_PER_MS
    }

    pub const fn epoch_duration_ms(&self) -> u64 {
        self.epoch_duration_ms
    }

    /// Number of nodes in the group, at least 1
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// This node's rank, `None` when unknown
    pub const fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Random color shared by all nodes for this epoch
    pub fn color(&self, draw_index: u32) -> Rgb {
        color_for(self.epoch, draw_index)
    }
}

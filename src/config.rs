//! Build-time configuration

use embassy_time::Duration;

use crate::animation::AnimationId;

/// Length of one animation period shared by all nodes
pub const DEFAULT_EPOCH_DURATION_MS: u64 = 6_000;

/// Longest epoch duration the context accepts; longer values are clamped
///
/// Drop replays up to one step per 30 ms of the epoch in a single render,
/// so this also bounds its work per frame to 2000 steps.
pub const MAX_EPOCH_DURATION_MS: u64 = 60_000;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Animations played in turn, one per epoch
pub const DEFAULT_ANIMATIONS: &[AnimationId] = &[
    AnimationId::Scan,
    AnimationId::SequencedBlink,
    AnimationId::Rainbow,
    AnimationId::Wipe,
    AnimationId::Pulse,
    AnimationId::Spin,
    AnimationId::RainbowScan,
    AnimationId::Drop,
    AnimationId::Flash,
    AnimationId::RainbowFade,
];

/// Configuration for the frame pump
///
/// Every node on the mesh must use the same epoch duration and animation
/// list, otherwise they select different animations.
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Number of LEDs on this node's strip
    pub led_count: usize,
    /// Length of one animation period
    pub epoch_duration: Duration,
    /// Animations in selection order
    pub animations: &'static [AnimationId],
    /// Local frame pacing
    pub frame_duration: Duration,
}

impl SyncConfig {
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            epoch_duration: Duration::from_millis(DEFAULT_EPOCH_DURATION_MS),
            animations: DEFAULT_ANIMATIONS,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }

    /// Set the epoch duration
    ///
    /// Clamped to `1..=MAX_EPOCH_DURATION_MS` milliseconds when the context
    /// is computed.
    #[must_use]
    pub const fn with_epoch_duration(mut self, duration: Duration) -> Self {
        self.epoch_duration = duration;
        self
    }

    /// Set the animation list
    #[must_use]
    pub const fn with_animations(mut self, animations: &'static [AnimationId]) -> Self {
        self.animations = animations;
        self
    }

    /// Set the frame duration
    #[must_use]
    pub const fn with_frame_duration(mut self, duration: Duration) -> Self {
        self.frame_duration = duration;
        self
    }
}

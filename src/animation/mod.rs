//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait and reads nothing but the
//! frame's [`RenderContext`], so every node renders the same picture for the
//! same shared inputs.

mod drop_stack;
mod flash;
mod pulse;
mod rainbow;
mod scan;
mod sequenced_blink;
mod spin;
mod wipe;

pub use drop_stack::DropAnimation;
pub use flash::FlashAnimation;
pub use pulse::PulseAnimation;
pub use rainbow::{RainbowAnimation, RainbowFadeAnimation, RainbowScanAnimation};
pub use scan::ScanAnimation;
pub use sequenced_blink::SequencedBlinkAnimation;
pub use spin::SpinAnimation;
pub use wipe::WipeAnimation;

use crate::{color::Rgb, context::RenderContext};

const ANIMATION_NAME_SCAN: &str = "scan";
const ANIMATION_NAME_SPIN: &str = "spin";
const ANIMATION_NAME_SEQUENCED_BLINK: &str = "sequenced_blink";
const ANIMATION_NAME_WIPE: &str = "wipe";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_RAINBOW_SCAN: &str = "rainbow_scan";
const ANIMATION_NAME_RAINBOW_FADE: &str = "rainbow_fade";
const ANIMATION_NAME_FLASH: &str = "flash";
const ANIMATION_NAME_PULSE: &str = "pulse";
const ANIMATION_NAME_DROP: &str = "drop";

const ANIMATION_ID_SCAN: u8 = 0;
const ANIMATION_ID_SPIN: u8 = 1;
const ANIMATION_ID_SEQUENCED_BLINK: u8 = 2;
const ANIMATION_ID_WIPE: u8 = 3;
const ANIMATION_ID_RAINBOW: u8 = 4;
const ANIMATION_ID_RAINBOW_SCAN: u8 = 5;
const ANIMATION_ID_RAINBOW_FADE: u8 = 6;
const ANIMATION_ID_FLASH: u8 = 7;
const ANIMATION_ID_PULSE: u8 = 8;
const ANIMATION_ID_DROP: u8 = 9;

pub trait Animation {
    /// Render a single frame into `leds`
    ///
    /// Must not block. `leds` is expected to hold `ctx.led_count()` entries.
    fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]);
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Single pixel bouncing between the strip ends
    Scan(ScanAnimation),
    /// Single pixel wrapping around the strip
    Spin(SpinAnimation),
    /// Nodes light up one after another by rank
    SequencedBlink(SequencedBlinkAnimation),
    /// Split point sweeping the strip
    Wipe(WipeAnimation),
    /// Drifting rainbow with per-epoch speed and width
    Rainbow(RainbowAnimation),
    /// Rainbow whose start hue follows shared time
    RainbowScan(RainbowScanAnimation),
    /// Solid color cycling through the hues
    RainbowFade(RainbowFadeAnimation),
    /// Two contrasting colors alternating every second
    Flash(FlashAnimation),
    /// Smooth blend between two contrasting colors
    Pulse(PulseAnimation),
    /// Blocks dropping and stacking up
    Drop(DropAnimation),
}

/// Known animation ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Scan = ANIMATION_ID_SCAN,
    Spin = ANIMATION_ID_SPIN,
    SequencedBlink = ANIMATION_ID_SEQUENCED_BLINK,
    Wipe = ANIMATION_ID_WIPE,
    Rainbow = ANIMATION_ID_RAINBOW,
    RainbowScan = ANIMATION_ID_RAINBOW_SCAN,
    RainbowFade = ANIMATION_ID_RAINBOW_FADE,
    Flash = ANIMATION_ID_FLASH,
    Pulse = ANIMATION_ID_PULSE,
    Drop = ANIMATION_ID_DROP,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_SCAN => Self::Scan,
            ANIMATION_ID_SPIN => Self::Spin,
            ANIMATION_ID_SEQUENCED_BLINK => Self::SequencedBlink,
            ANIMATION_ID_WIPE => Self::Wipe,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_RAINBOW_SCAN => Self::RainbowScan,
            ANIMATION_ID_RAINBOW_FADE => Self::RainbowFade,
            ANIMATION_ID_FLASH => Self::Flash,
            ANIMATION_ID_PULSE => Self::Pulse,
            ANIMATION_ID_DROP => Self::Drop,
            _ => return None,
        })
    }

    /// Build a fresh instance for the context's epoch
    ///
    /// Animations that pick colors or speeds draw them from the epoch, so
    /// every node builds an identical instance.
    pub fn to_slot(self, ctx: &RenderContext) -> AnimationSlot {
        match self {
            Self::Scan => AnimationSlot::Scan(ScanAnimation::new()),
            Self::Spin => AnimationSlot::Spin(SpinAnimation::new()),
            Self::SequencedBlink => {
                AnimationSlot::SequencedBlink(SequencedBlinkAnimation::new())
            }
            Self::Wipe => AnimationSlot::Wipe(WipeAnimation::new()),
            Self::Rainbow => AnimationSlot::Rainbow(RainbowAnimation::new(ctx.epoch())),
            Self::RainbowScan => AnimationSlot::RainbowScan(RainbowScanAnimation::new()),
            Self::RainbowFade => AnimationSlot::RainbowFade(RainbowFadeAnimation::new()),
            Self::Flash => AnimationSlot::Flash(FlashAnimation::new(ctx.epoch())),
            Self::Pulse => AnimationSlot::Pulse(PulseAnimation::new(ctx.epoch())),
            Self::Drop => AnimationSlot::Drop(DropAnimation::new(ctx.epoch())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scan => ANIMATION_NAME_SCAN,
            Self::Spin => ANIMATION_NAME_SPIN,
            Self::SequencedBlink => ANIMATION_NAME_SEQUENCED_BLINK,
            Self::Wipe => ANIMATION_NAME_WIPE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::RainbowScan => ANIMATION_NAME_RAINBOW_SCAN,
            Self::RainbowFade => ANIMATION_NAME_RAINBOW_FADE,
            Self::Flash => ANIMATION_NAME_FLASH,
            Self::Pulse => ANIMATION_NAME_PULSE,
            Self::Drop => ANIMATION_NAME_DROP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_SCAN => Some(Self::Scan),
            ANIMATION_NAME_SPIN => Some(Self::Spin),
            ANIMATION_NAME_SEQUENCED_BLINK => Some(Self::SequencedBlink),
            ANIMATION_NAME_WIPE => Some(Self::Wipe),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_RAINBOW_SCAN => Some(Self::RainbowScan),
            ANIMATION_NAME_RAINBOW_FADE => Some(Self::RainbowFade),
            ANIMATION_NAME_FLASH => Some(Self::Flash),
            ANIMATION_NAME_PULSE => Some(Self::Pulse),
            ANIMATION_NAME_DROP => Some(Self::Drop),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Render the current animation
    pub fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        match self {
            Self::Scan(animation) => animation.render(ctx, leds),
            Self::Spin(animation) => animation.render(ctx, leds),
            Self::SequencedBlink(animation) => animation.render(ctx, leds),
            Self::Wipe(animation) => animation.render(ctx, leds),
            Self::Rainbow(animation) => animation.render(ctx, leds),
            Self::RainbowScan(animation) => animation.render(ctx, leds),
            Self::RainbowFade(animation) => animation.render(ctx, leds),
            Self::Flash(animation) => animation.render(ctx, leds),
            Self::Pulse(animation) => animation.render(ctx, leds),
            Self::Drop(animation) => animation.render(ctx, leds),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Scan(_) => AnimationId::Scan,
            Self::Spin(_) => AnimationId::Spin,
            Self::SequencedBlink(_) => AnimationId::SequencedBlink,
            Self::Wipe(_) => AnimationId::Wipe,
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::RainbowScan(_) => AnimationId::RainbowScan,
            Self::RainbowFade(_) => AnimationId::RainbowFade,
            Self::Flash(_) => AnimationId::Flash,
            Self::Pulse(_) => AnimationId::Pulse,
            Self::Drop(_) => AnimationId::Drop,
        }
    }
}

#![no_std]

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod context;
pub mod frame_pump;
pub mod math8;
pub mod membership;
pub mod random;
pub mod scheduler;
pub mod signal;

pub use animation::{Animation, AnimationId, AnimationSlot};
pub use clock::{MeshClock, OffsetClock};
pub use config::SyncConfig;
pub use context::{Epoch, RenderContext};
pub use frame_pump::{FramePump, FrameResult};
pub use membership::{
    ConsistencyError, MembershipOverflow, MembershipProvider, MembershipSnapshot, NodeId,
    SharedMembership, StaticMembership,
};
pub use random::color_for;
pub use scheduler::AnimationScheduler;
pub use signal::{cylon_signal, frame_number, odometer_signal};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame pump commits every rendered frame through it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

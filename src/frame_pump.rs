//! Frame loop driving one node
//!
//! Each tick captures the membership, builds the render context from mesh
//! time, lets the scheduler paint the buffer and commits it to the output
//! driver. It only computes how long to wait; the caller does the sleeping.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::clock::MeshClock;
use crate::color::Rgb;
use crate::config::SyncConfig;
use crate::context::RenderContext;
use crate::membership::{MembershipProvider, MembershipSnapshot};
use crate::scheduler::AnimationScheduler;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Context the frame was rendered with.
    pub context: RenderContext,
}

/// Reads the shared inputs, renders and commits one frame per tick.
///
/// # Usage
///
/// ```ignore
/// let mut pump = FramePump::<_, _, _, 60, 32>::new(&SyncConfig::new(60), clock, membership, driver);
///
/// loop {
///     let result = pump.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FramePump<O, C, M, const MAX_LEDS: usize, const MAX_NODES: usize>
where
    O: OutputDriver,
    C: MeshClock,
    M: MembershipProvider,
{
    output: O,
    clock: C,
    membership: M,
    scheduler: AnimationScheduler,
    frame_buffer: [Rgb; MAX_LEDS],
    led_count: usize,
    epoch_duration: Duration,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O, C, M, const MAX_LEDS: usize, const MAX_NODES: usize> FramePump<O, C, M, MAX_LEDS, MAX_NODES>
where
    O: OutputDriver,
    C: MeshClock,
    M: MembershipProvider,
{
    /// Create a new frame pump.
    ///
    /// The LED count is capped at `MAX_LEDS`.
    pub fn new(config: &SyncConfig, clock: C, membership: M, driver: O) -> Self {
        Self {
            output: driver,
            clock,
            membership,
            scheduler: AnimationScheduler::new(config.animations),
            frame_buffer: [Rgb::default(); MAX_LEDS],
            led_count: config.led_count.min(MAX_LEDS),
            epoch_duration: config.epoch_duration,
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Render the current frame into the buffer without committing it.
    pub fn render(&mut self) -> RenderContext {
        let snapshot = MembershipSnapshot::<MAX_NODES>::capture(&self.membership);
        let ctx = RenderContext::compute(
            self.clock.now_us(),
            &snapshot,
            self.led_count,
            self.epoch_duration,
        );

        let frame = &mut self.frame_buffer[..self.led_count];
        self.scheduler.render(&ctx, frame);
        ctx
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Commits it to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let context = self.render();
        self.output.write(&self.frame_buffer[..self.led_count]);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            context,
        }
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.led_count]
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn membership(&self) -> &M {
        &self.membership
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

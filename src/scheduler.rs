//! Epoch-driven animation selection
//!
//! The animation for an epoch is `animations[epoch mod len]`. Every node
//! computes the epoch from the same shared clock, so all of them run the same
//! animation without exchanging a message.

use crate::animation::{AnimationId, AnimationSlot};
use crate::color::{BLACK, Rgb, fill_solid};
use crate::context::{Epoch, RenderContext};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Instance of the animation running in one epoch
#[derive(Debug, Clone)]
struct ActiveAnimation {
    epoch: Epoch,
    slot: AnimationSlot,
}

/// Index of the animation selected for `epoch`
///
/// Returns `None` for an empty registry.
#[allow(clippy::cast_possible_truncation)]
pub const fn selected_index(epoch: Epoch, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((epoch % count as u64) as usize)
}

/// Owns the registry and the running animation instance
///
/// The instance is rebuilt whenever the epoch changes, even if the same
/// animation is selected again, so per-epoch colors and state start fresh.
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    animations: &'static [AnimationId],
    active: Option<ActiveAnimation>,
}

impl AnimationScheduler {
    pub const fn new(animations: &'static [AnimationId]) -> Self {
        Self {
            animations,
            active: None,
        }
    }

    /// Registered animations in selection order
    pub const fn animations(&self) -> &'static [AnimationId] {
        self.animations
    }

    /// Animation selected for `epoch`
    pub fn select(&self, epoch: Epoch) -> Option<AnimationId> {
        selected_index(epoch, self.animations.len())
            .and_then(|index| self.animations.get(index).copied())
    }

    /// Animation currently running, if any
    pub fn active(&self) -> Option<AnimationId> {
        self.active.as_ref().map(|active| active.slot.id())
    }

    /// Epoch of the running animation instance
    pub fn active_epoch(&self) -> Option<Epoch> {
        self.active.as_ref().map(|active| active.epoch)
    }

    /// Render one frame with the animation of the context's epoch
    ///
    /// An empty registry renders a blank strip.
    pub fn render(&mut self, ctx: &RenderContext, leds: &mut [Rgb]) {
        let epoch = ctx.epoch();
        let Some(id) = self.select(epoch) else {
            self.active = None;
            fill_solid(leds, BLACK);
            return;
        };

        let is_current = self
            .active
            .as_ref()
            .is_some_and(|active| active.epoch == epoch);
        if !is_current {
            #[cfg(feature = "esp32-log")]
            println!(
                "[AnimationScheduler.render] epoch {} starts {}",
                epoch,
                id.as_str()
            );
            self.active = Some(ActiveAnimation {
                epoch,
                slot: id.to_slot(ctx),
            });
        }

        if let Some(active) = self.active.as_mut() {
            active.slot.render(ctx, leds);
        }
    }
}

//! Shared mesh time
//!
//! The mesh layer keeps node clocks in agreement; this module only defines
//! how the frame loop reads that time.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Instant;

/// Source of shared mesh time in microseconds
///
/// Values must never decrease. Any `Fn() -> u64` is a clock.
pub trait MeshClock {
    fn now_us(&self) -> u64;
}

impl<F: Fn() -> u64> MeshClock for F {
    fn now_us(&self) -> u64 {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct OffsetState {
    offset_us: i64,
    last_us: u64,
}

/// Local monotonic time shifted by an offset supplied by the mesh
///
/// Offset corrections may move backwards; reported time then holds still
/// until the local clock catches up, so readings never decrease.
pub struct OffsetClock {
    state: Mutex<Cell<OffsetState>>,
}

impl OffsetClock {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(OffsetState {
                offset_us: 0,
                last_us: 0,
            })),
        }
    }

    /// Replace the offset between local and mesh time
    pub fn set_offset(&self, offset_us: i64) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.offset_us = offset_us;
            cell.set(state);
        });
    }

    /// Shift the offset by `delta_us`
    pub fn adjust(&self, delta_us: i64) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.offset_us = state.offset_us.saturating_add(delta_us);
            cell.set(state);
        });
    }

    /// Current offset in microseconds
    pub fn offset(&self) -> i64 {
        critical_section::with(|cs| self.state.borrow(cs).get().offset_us)
    }

    /// Mesh time at the given local instant
    pub fn at(&self, local: Instant) -> u64 {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let shared = local
                .as_micros()
                .saturating_add_signed(state.offset_us)
                .max(state.last_us);
            state.last_us = shared;
            cell.set(state);
            shared
        })
    }
}

impl Default for OffsetClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshClock for OffsetClock {
    fn now_us(&self) -> u64 {
        self.at(Instant::now())
    }
}

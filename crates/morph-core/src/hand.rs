//! Hand sensor input and the single-slot mailbox that decouples it from the
//! render loop.
//!
//! The sensor runs at its own cadence and overwrites the slot; the render
//! loop copies whatever is there at the start of each frame. Nothing queues
//! and nothing waits for a fresh reading.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use glam::Vec2;

/// Discrete gesture label reported by the sensor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Gesture {
    #[default]
    None,
    Open,
    Fist,
    Pinch,
}

/// One sensor reading. `position` is normalised to [0, 1]^2 with the origin
/// at the top-left of the camera frame.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HandState {
    pub is_present: bool,
    pub gesture: Gesture,
    pub position: Vec2,
}

impl HandState {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn present(gesture: Gesture, x: f32, y: f32) -> Self {
        Self {
            is_present: true,
            gesture,
            position: Vec2::new(x, y),
        }
    }
}

/// Latest-value slot shared between the sensor and the render loop.
#[derive(Default)]
pub struct HandMailbox {
    slot: Mutex<HandState>,
    sequence: AtomicU64,
}

impl HandMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored reading. Called from the sensor side.
    pub fn publish(&self, state: HandState) {
        // A poisoned slot still holds a plain Copy value; keep using it.
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = state;
        self.sequence.fetch_add(1, Ordering::Release);
    }

    /// Most recent reading, or an absent hand if nothing was published yet.
    pub fn latest(&self) -> HandState {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of readings published so far.
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::Acquire)
    }
}
